use serde::Serialize;
use std::collections::BTreeMap;

/// Probability per class label. Iteration is in lexicographic label order,
/// which is also the order [`ClassDistribution::argmax`] breaks ties in.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ClassDistribution {
    probabilities: BTreeMap<String, f64>,
}

pub type PriorTable = ClassDistribution;
pub type Posterior = ClassDistribution;

impl ClassDistribution {
    pub fn new(probabilities: BTreeMap<String, f64>) -> ClassDistribution {
        ClassDistribution { probabilities }
    }

    pub fn get(&self, class_label: &str) -> Option<f64> {
        self.probabilities.get(class_label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.probabilities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Class with the highest probability. Among equal maxima the
    /// lexicographically smallest label wins.
    pub fn argmax(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (class, p) in self.iter() {
            match best {
                Some((_, best_p)) if p <= best_p => {}
                _ => best = Some((class, p)),
            }
        }
        best
    }

    /// Entries by descending probability, ties kept in label order.
    pub fn sorted_descending(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}

impl FromIterator<(String, f64)> for ClassDistribution {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        ClassDistribution::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(entries: &[(&str, f64)]) -> ClassDistribution {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn argmax_picks_highest() {
        let d = dist(&[("drugA", 0.2), ("drugB", 0.7), ("drugC", 0.1)]);
        assert_eq!(d.argmax(), Some(("drugB", 0.7)));
    }

    #[test]
    fn argmax_ties_resolve_to_smallest_label_regardless_of_insertion() {
        let forward = dist(&[("beta", 0.5), ("alpha", 0.5)]);
        let backward = dist(&[("alpha", 0.5), ("beta", 0.5)]);
        assert_eq!(forward.argmax().map(|(c, _)| c), Some("alpha"));
        assert_eq!(backward.argmax().map(|(c, _)| c), Some("alpha"));
    }

    #[test]
    fn argmax_of_all_zero_is_first_label() {
        let d = dist(&[("z", 0.0), ("m", 0.0), ("b", 0.0)]);
        assert_eq!(d.argmax(), Some(("b", 0.0)));
    }

    #[test]
    fn argmax_of_empty_is_none() {
        assert!(ClassDistribution::default().argmax().is_none());
    }

    #[test]
    fn sorted_descending_is_stable_for_ties() {
        let d = dist(&[("c", 0.25), ("a", 0.25), ("b", 0.5)]);
        let order: Vec<&str> = d.sorted_descending().into_iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }
}
