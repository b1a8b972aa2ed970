use crate::core::attributes::{Feature, Observation};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record has an empty class label")]
    EmptyClassLabel,
}

/// One labeled patient observation. Fields are private so a record cannot
/// change after it has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    age: String,
    bp: String,
    cholesterol: String,
    na_to_k: String,
    class_label: String,
}

impl Record {
    pub fn new(
        age: impl Into<String>,
        bp: impl Into<String>,
        cholesterol: impl Into<String>,
        na_to_k: impl Into<String>,
        class_label: impl Into<String>,
    ) -> Result<Record, RecordError> {
        let class_label = class_label.into();
        if class_label.trim().is_empty() {
            return Err(RecordError::EmptyClassLabel);
        }

        Ok(Record {
            age: age.into(),
            bp: bp.into(),
            cholesterol: cholesterol.into(),
            na_to_k: na_to_k.into(),
            class_label,
        })
    }

    pub fn class_label(&self) -> &str {
        &self.class_label
    }
}

impl Observation for Record {
    fn value_of(&self, feature: Feature) -> &str {
        match feature {
            Feature::Age => &self.age,
            Feature::Bp => &self.bp,
            Feature::Cholesterol => &self.cholesterol,
            Feature::NaToK => &self.na_to_k,
        }
    }
}
