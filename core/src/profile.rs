//! Employee and client records: the predictor's read-only inputs.

use crate::{
    error::{PlanError, PlanResult},
    types::{EntityId, Money},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(PlanError::invalid(format!("unknown difficulty '{other}'"))),
        }
    }
}

/// Account priority as shown on client cards. Not used in scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    /// Performance rating, 0–100.
    pub score: u32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

impl Employee {
    pub fn has_strength(&self, tag: &str) -> bool {
        self.strengths.iter().any(|s| s == tag)
    }

    pub fn has_weakness(&self, tag: &str) -> bool {
        self.weaknesses.iter().any(|w| w == tag)
    }

    pub fn validate(&self) -> PlanResult<()> {
        if self.id.trim().is_empty() {
            return Err(PlanError::invalid("employee id is empty"));
        }
        if self.score > MAX_SCORE {
            return Err(PlanError::invalid(format!(
                "employee '{}' score {} exceeds {MAX_SCORE}",
                self.id, self.score
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    pub deal_value: Money,
    pub difficulty: Difficulty,
    /// Free-text descriptor, e.g. "Analytical, data-driven, skeptical".
    #[serde(default)]
    pub personality: String,
}

impl Client {
    /// Case-sensitive substring test against the personality text.
    pub fn personality_mentions(&self, tag: &str) -> bool {
        self.personality.contains(tag)
    }

    pub fn validate(&self) -> PlanResult<()> {
        if self.id.trim().is_empty() {
            return Err(PlanError::invalid("client id is empty"));
        }
        if self.deal_value == 0 {
            return Err(PlanError::invalid(format!(
                "client '{}' has a zero deal value",
                self.id
            )));
        }
        Ok(())
    }
}
