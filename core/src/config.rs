use crate::{
    error::{PlanError, PlanResult},
    profile::Difficulty,
    types::Rate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DifficultyModifiers {
    pub low: i32,
    pub medium: i32,
    pub hard: i32,
}

impl Default for DifficultyModifiers {
    fn default() -> Self {
        Self { low: 0, medium: -5, hard: -10 }
    }
}

impl DifficultyModifiers {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> i32 {
        match difficulty {
            Difficulty::Low => self.low,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Lower bounds (exclusive) for each recommendation tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationThresholds {
    pub highly_recommended: Rate,
    pub recommended: Rate,
    pub neutral: Rate,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            highly_recommended: 80,
            recommended: 65,
            neutral: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Timelines {
    pub low: String,
    pub medium: String,
    pub hard: String,
}

impl Default for Timelines {
    fn default() -> Self {
        Self {
            low: "2-4 weeks".into(),
            medium: "4-6 weeks".into(),
            hard: "6-8 weeks".into(),
        }
    }
}

impl Timelines {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> &str {
        match difficulty {
            Difficulty::Low => &self.low,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

/// Tuning knobs for the match predictor. Every field is optional in
/// the JSON file; missing ones take the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PredictorConfig {
    pub difficulty_modifiers: DifficultyModifiers,
    /// Width of the uniform noise added to the raw rate: [0, noise_span).
    pub noise_span: f64,
    pub min_rate: Rate,
    pub max_rate: Rate,
    pub thresholds: RecommendationThresholds,
    pub timelines: Timelines,
    /// Rates at or above this render as trending up.
    pub trending_threshold: Rate,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            difficulty_modifiers: DifficultyModifiers::default(),
            noise_span: 10.0,
            min_rate: 30,
            max_rate: 95,
            thresholds: RecommendationThresholds::default(),
            timelines: Timelines::default(),
            trending_threshold: 70,
        }
    }
}

impl PredictorConfig {
    /// Load from a JSON file and validate.
    /// In tests, use PredictorConfig::default().
    pub fn load(path: impl AsRef<Path>) -> PlanResult<Self> {
        let path = path.as_ref();
        let content = PlanError::read_file(path)?;
        let config: PredictorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("predictor config loaded from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> PlanResult<()> {
        if self.min_rate > self.max_rate {
            return Err(PlanError::Config {
                reason: format!("minRate {} exceeds maxRate {}", self.min_rate, self.max_rate),
            });
        }
        if !self.noise_span.is_finite() || self.noise_span < 0.0 {
            return Err(PlanError::Config {
                reason: format!("noiseSpan must be a finite, non-negative number, got {}", self.noise_span),
            });
        }
        let t = &self.thresholds;
        if !(t.highly_recommended >= t.recommended && t.recommended >= t.neutral) {
            return Err(PlanError::Config {
                reason: format!(
                    "thresholds must descend: highlyRecommended {} >= recommended {} >= neutral {}",
                    t.highly_recommended, t.recommended, t.neutral
                ),
            });
        }
        Ok(())
    }
}
