use crate::{config::RecommendationThresholds, types::Rate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommendation tier for an employee/client pairing.
/// Declared lowest first so `Ord` follows tier strength.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    NotRecommended,
    Neutral,
    Recommended,
    HighlyRecommended,
}

impl Recommendation {
    /// Step function over the success rate. Thresholds are exclusive
    /// lower bounds, checked from the top tier down.
    pub fn classify(rate: Rate, thresholds: &RecommendationThresholds) -> Self {
        if rate > thresholds.highly_recommended {
            Self::HighlyRecommended
        } else if rate > thresholds.recommended {
            Self::Recommended
        } else if rate > thresholds.neutral {
            Self::Neutral
        } else {
            Self::NotRecommended
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighlyRecommended => "highly-recommended",
            Self::Recommended => "recommended",
            Self::Neutral => "neutral",
            Self::NotRecommended => "not-recommended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly Recommended Match",
            Self::Recommended => "Recommended Match",
            Self::Neutral => "Neutral Match",
            Self::NotRecommended => "Not Recommended",
        }
    }

    /// Strategic guidance shown alongside the tier.
    pub fn guidance(&self) -> [&'static str; 3] {
        match self {
            Self::HighlyRecommended => [
                "Excellent match - proceed with confidence",
                "Employee skills align well with client needs",
                "High probability of successful outcome",
            ],
            Self::Recommended => [
                "Good match - proceed with standard preparation",
                "Provide additional training on identified weak areas",
                "Success likely with proper support",
            ],
            Self::Neutral => [
                "Moderate risk - consider alternatives",
                "Provide extensive preparation and support",
                "Consider pairing with a senior team member",
            ],
            Self::NotRecommended => [
                "High risk - strongly consider reassignment",
                "Skill gaps may lead to unfavorable outcome",
                "If proceeding, ensure heavy manager involvement",
            ],
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
