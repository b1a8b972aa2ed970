use crate::core::attributes::{Feature, Observation};
use crate::core::instances::Record;
use crate::utils::unique::unique_values;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Read-only collection of labeled records, in load order.
#[derive(Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Dataset {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn number_of_features(&self) -> usize {
        Feature::ALL.len()
    }

    /// Record count per class label, keyed in lexicographic label order.
    pub fn class_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for r in &self.records {
            *counts.entry(r.class_label().to_string()).or_insert(0) += 1;
        }
        counts
    }

    pub fn class_labels(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|r| r.class_label().to_string())
            .collect()
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_labels().len()
    }

    pub fn unique_values(&self, feature: Feature) -> BTreeSet<String> {
        unique_values(&self.records, feature)
    }

    pub fn records_of_class<'a>(
        &'a self,
        class_label: &'a str,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records
            .iter()
            .filter(move |r| r.class_label() == class_label)
    }

    /// `(class_total, match)` for `feature == value` within `class_label`.
    pub fn count_matches(&self, feature: Feature, value: &str, class_label: &str) -> (usize, usize) {
        self.records_of_class(class_label)
            .fold((0, 0), |(total, matched), r| {
                let hit = usize::from(r.value_of(feature) == value);
                (total + 1, matched + hit)
            })
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("n_records", &self.records.len())
            .field("n_classes", &self.number_of_classes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(age: &str, bp: &str, class: &str) -> Record {
        Record::new(age, bp, "HIGH", "LOW", class).unwrap()
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            rec("YOUNG", "HIGH", "drugB"),
            rec("OLD", "LOW", "drugA"),
            rec("YOUNG", "LOW", "drugB"),
            rec("ADULT", "HIGH", "drugB"),
        ])
    }

    #[test]
    fn class_counts_are_sorted_by_label() {
        let counts = sample().class_counts();
        let keys: Vec<&String> = counts.keys().collect();
        assert_eq!(keys, vec!["drugA", "drugB"]);
        assert_eq!(counts["drugA"], 1);
        assert_eq!(counts["drugB"], 3);
    }

    #[test]
    fn counts_matches_within_one_class() {
        let ds = sample();
        assert_eq!(ds.count_matches(Feature::Age, "YOUNG", "drugB"), (3, 2));
        assert_eq!(ds.count_matches(Feature::Age, "YOUNG", "drugA"), (1, 0));
        assert_eq!(ds.count_matches(Feature::Age, "YOUNG", "drugZ"), (0, 0));
    }

    #[test]
    fn unique_values_span_the_whole_dataset() {
        let ds = sample();
        assert_eq!(ds.unique_values(Feature::Age).len(), 3);
        assert_eq!(ds.unique_values(Feature::Bp).len(), 2);
        assert_eq!(ds.number_of_classes(), 2);
        assert_eq!(ds.number_of_features(), 4);
    }

    #[test]
    fn dataset_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dataset>();
    }
}
