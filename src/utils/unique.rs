use crate::core::attributes::{Feature, Observation};
use std::collections::BTreeSet;

/// Distinct values of `feature` over every observation given, sorted.
pub fn unique_values<'a, O, I>(observations: I, feature: Feature) -> BTreeSet<String>
where
    O: Observation + 'a,
    I: IntoIterator<Item = &'a O>,
{
    observations
        .into_iter()
        .map(|o| o.value_of(feature).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::Record;

    #[test]
    fn collects_distinct_values_across_all_classes() {
        let records = vec![
            Record::new("YOUNG", "HIGH", "HIGH", "LOW", "A").unwrap(),
            Record::new("OLD", "HIGH", "HIGH", "LOW", "B").unwrap(),
            Record::new("YOUNG", "LOW", "HIGH", "LOW", "B").unwrap(),
        ];

        let ages = unique_values(&records, Feature::Age);
        assert_eq!(ages.into_iter().collect::<Vec<_>>(), vec!["OLD", "YOUNG"]);

        let chol = unique_values(&records, Feature::Cholesterol);
        assert_eq!(chol.len(), 1);
    }

    #[test]
    fn empty_input_has_no_values() {
        let records: Vec<Record> = Vec::new();
        assert!(unique_values(&records, Feature::Bp).is_empty());
    }
}
