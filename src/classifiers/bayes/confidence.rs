use serde::Serialize;
use strum_macros::Display;

const HIGH_ABOVE_PERCENT: f64 = 70.0;
const MEDIUM_ABOVE_PERCENT: f64 = 50.0;
const ADVISORY_BELOW_PERCENT: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Confidence {
    /// Winning probability as a percentage, rounded to two decimals.
    pub percent: f64,
    pub level: ConfidenceLevel,
    /// Set below 60%: the result should not be treated as conclusive.
    pub advisory: bool,
}

impl Confidence {
    pub fn from_probability(p: f64) -> Confidence {
        let percent = (p * 100.0 * 100.0).round() / 100.0;

        let level = if percent > HIGH_ABOVE_PERCENT {
            ConfidenceLevel::High
        } else if percent > MEDIUM_ABOVE_PERCENT {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        };

        Confidence {
            percent,
            level,
            advisory: percent < ADVISORY_BELOW_PERCENT,
        }
    }
}
