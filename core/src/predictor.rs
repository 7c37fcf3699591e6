//! Match predictor: scores an employee against a client.
//!
//! Algorithm:
//!   1. raw = employee.score + difficulty modifier + uniform[0, noise_span)
//!   2. success_rate = round(clamp(raw, min_rate, max_rate))
//!   3. recommendation = step function of success_rate
//!   4. risks / opportunities from the rule tables in rules.rs
//!   5. time_to_close from the client's difficulty
//!
//! The predictor holds configuration only. Nothing is retained
//! between calls; the single random draw comes from the caller.

use crate::{
    config::PredictorConfig,
    error::{PlanError, PlanResult},
    profile::{Client, Employee},
    recommendation::Recommendation,
    rng::UniformSource,
    rules,
    store::ProfileStore,
    types::{Money, Rate},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub success_rate: Rate,
    pub deal_value: Money,
    pub time_to_close: String,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
    pub recommendation: Recommendation,
}

impl Prediction {
    /// Deal value weighted by the success rate.
    pub fn adjusted_value(&self) -> Money {
        self.deal_value.saturating_mul(self.success_rate as Money) / 100
    }

    pub fn is_trending_up(&self, config: &PredictorConfig) -> bool {
        self.success_rate >= config.trending_threshold
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchPredictor {
    config: PredictorConfig,
}

impl MatchPredictor {
    pub fn new(config: PredictorConfig) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Clamped, unrounded rate for a given noise value.
    fn raw_rate(&self, employee: &Employee, client: &Client, noise: f64) -> f64 {
        let modifier = self.config.difficulty_modifiers.for_difficulty(client.difficulty);
        let raw = employee.score as f64 + modifier as f64 + noise;
        raw.clamp(self.config.min_rate as f64, self.config.max_rate as f64)
    }

    pub fn predict(
        &self,
        employee: &Employee,
        client: &Client,
        source: &mut impl UniformSource,
    ) -> Prediction {
        let noise = source.next_f64() * self.config.noise_span;
        let success_rate = self.raw_rate(employee, client, noise).round() as Rate;
        let recommendation = Recommendation::classify(success_rate, &self.config.thresholds);

        let prediction = Prediction {
            success_rate,
            deal_value: client.deal_value,
            time_to_close: self.config.timelines.for_difficulty(client.difficulty).to_string(),
            risks: rules::risks(employee, client),
            opportunities: rules::opportunities(employee, client),
            recommendation,
        };

        log::debug!(
            "predict employee={} client={} noise={noise:.3} rate={} tier={}",
            employee.id,
            client.id,
            prediction.success_rate,
            prediction.recommendation
        );
        prediction
    }

    /// Resolve both ids against the store, then predict. Empty or
    /// unknown ids are errors; no default prediction is produced.
    pub fn predict_ids(
        &self,
        store: &ProfileStore,
        employee_id: &str,
        client_id: &str,
        source: &mut impl UniformSource,
    ) -> PlanResult<Prediction> {
        if employee_id.trim().is_empty() {
            return Err(PlanError::invalid("no employee selected"));
        }
        if client_id.trim().is_empty() {
            return Err(PlanError::invalid("no client selected"));
        }
        let employee = store.employee(employee_id)?;
        let client = store.client(client_id)?;
        Ok(self.predict(employee, client, source))
    }
}
