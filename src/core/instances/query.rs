use crate::core::attributes::{Feature, Observation};
use serde::{Deserialize, Serialize};

/// Candidate input for a prediction. Values are free-form and are not
/// checked against the dataset's domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub age: String,
    pub bp: String,
    pub cholesterol: String,
    pub na_to_k: String,
}

impl Query {
    pub fn new(
        age: impl Into<String>,
        bp: impl Into<String>,
        cholesterol: impl Into<String>,
        na_to_k: impl Into<String>,
    ) -> Query {
        Query {
            age: age.into(),
            bp: bp.into(),
            cholesterol: cholesterol.into(),
            na_to_k: na_to_k.into(),
        }
    }

    /// Trims and upper-cases every value, the way the questionnaire reads
    /// typed answers.
    pub fn normalized(&self) -> Query {
        let norm = |s: &str| s.trim().to_uppercase();
        Query {
            age: norm(&self.age),
            bp: norm(&self.bp),
            cholesterol: norm(&self.cholesterol),
            na_to_k: norm(&self.na_to_k),
        }
    }
}

impl Observation for Query {
    fn value_of(&self, feature: Feature) -> &str {
        match feature {
            Feature::Age => &self.age,
            Feature::Bp => &self.bp,
            Feature::Cholesterol => &self.cholesterol,
            Feature::NaToK => &self.na_to_k,
        }
    }
}
