use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

/// The four categorical attributes a patient is described by.
///
/// `Display`/`FromStr` use the dataset column names (`Age`, `BP`,
/// `Cholesterol`, `Na_to_K`); parsing is case-insensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
)]
#[strum(ascii_case_insensitive)]
pub enum Feature {
    #[strum(serialize = "Age", message = "Age", detailed_message = "YOUNG / ADULT / OLD")]
    #[serde(rename = "Age")]
    Age,
    #[strum(serialize = "BP", message = "Blood pressure", detailed_message = "LOW / NORMAL / HIGH")]
    #[serde(rename = "BP")]
    Bp,
    #[strum(
        serialize = "Cholesterol",
        message = "Cholesterol",
        detailed_message = "NORMAL / HIGH"
    )]
    #[serde(rename = "Cholesterol")]
    Cholesterol,
    #[strum(
        serialize = "Na_to_K",
        message = "Sodium-to-potassium ratio",
        detailed_message = "LOW / NORMAL / HIGH"
    )]
    #[serde(rename = "Na_to_K")]
    NaToK,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Age,
        Feature::Bp,
        Feature::Cholesterol,
        Feature::NaToK,
    ];

    /// Values the questionnaire offers for this feature. The
    /// classifier does not restrict queries to these.
    pub fn suggested_values(&self) -> &'static [&'static str] {
        match self {
            Feature::Age => &["YOUNG", "ADULT", "OLD"],
            Feature::Bp => &["LOW", "NORMAL", "HIGH"],
            Feature::Cholesterol => &["NORMAL", "HIGH"],
            Feature::NaToK => &["LOW", "NORMAL", "HIGH"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn column_names_round_trip_case_insensitively() {
        assert_eq!(Feature::NaToK.to_string(), "Na_to_K");
        assert_eq!("na_to_k".parse::<Feature>().unwrap(), Feature::NaToK);
        assert_eq!("bp".parse::<Feature>().unwrap(), Feature::Bp);
        assert!("weight".parse::<Feature>().is_err());
    }

    #[test]
    fn iteration_matches_column_order() {
        let iterated: Vec<Feature> = Feature::iter().collect();
        assert_eq!(iterated, Feature::ALL.to_vec());
    }

    #[test]
    fn every_feature_has_a_prompt_message() {
        for f in Feature::iter() {
            assert!(f.get_message().is_some(), "{f} has no message");
            assert!(!f.suggested_values().is_empty());
        }
    }
}
