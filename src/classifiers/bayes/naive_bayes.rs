use crate::classifiers::bayes::{
    LikelihoodTable, Prediction, PriorTable, check_alpha, compute_likelihood_table,
    compute_prior, predict,
};
use crate::classifiers::{Classifier, ClassifierError};
use crate::core::attributes::Feature;
use crate::core::dataset::Dataset;
use crate::core::instances::Query;
use std::sync::Arc;

/// A dataset paired with a smoothing constant. Nothing is cached; every call
/// recomputes from the shared, immutable dataset.
#[derive(Debug, Clone)]
pub struct NaiveBayes {
    dataset: Arc<Dataset>,
    alpha: f64,
}

impl NaiveBayes {
    pub fn new(dataset: Arc<Dataset>, alpha: f64) -> Result<Self, ClassifierError> {
        check_alpha(alpha)?;
        Ok(Self { dataset, alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn priors(&self) -> Result<PriorTable, ClassifierError> {
        compute_prior(&self.dataset)
    }

    pub fn likelihood_table(&self, feature: Feature) -> Result<LikelihoodTable, ClassifierError> {
        compute_likelihood_table(&self.dataset, feature, self.alpha)
    }
}

impl Classifier for NaiveBayes {
    fn predict(&self, query: &Query) -> Result<Prediction, ClassifierError> {
        predict(&self.dataset, query, self.alpha)
    }

    fn class_labels(&self) -> Vec<String> {
        self.dataset.class_labels().into_iter().collect()
    }

    fn feature_domain(&self, feature: Feature) -> Vec<String> {
        self.dataset.unique_values(feature).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{drug_abc_dataset, two_drug_dataset};
    use std::thread;

    #[test]
    fn rejects_invalid_alpha_up_front() {
        let ds = Arc::new(two_drug_dataset());
        assert!(NaiveBayes::new(Arc::clone(&ds), -0.1).is_err());
        assert!(NaiveBayes::new(ds, 0.0).is_ok());
    }

    #[test]
    fn empty_dataset_fails_when_used() {
        let nb = NaiveBayes::new(Arc::new(Dataset::default()), 1.0).unwrap();
        assert_eq!(nb.priors(), Err(ClassifierError::EmptyDataset));
        let q = Query::new("YOUNG", "HIGH", "HIGH", "HIGH");
        assert_eq!(nb.predict(&q), Err(ClassifierError::EmptyDataset));
    }

    #[test]
    fn exposes_labels_and_domains() {
        let nb = NaiveBayes::new(Arc::new(drug_abc_dataset()), 1.0).unwrap();
        assert_eq!(nb.class_labels(), vec!["drugA", "drugB", "drugC"]);
        assert_eq!(nb.feature_domain(Feature::Age), vec!["ADULT", "OLD", "YOUNG"]);
        assert_eq!(nb.likelihood_table(Feature::Cholesterol).unwrap().alpha(), 1.0);
    }

    #[test]
    fn changing_alpha_changes_table() {
        let dataset = Arc::new(drug_abc_dataset());
        let nb = NaiveBayes::new(Arc::clone(&dataset), 1.0).unwrap();
        let raw = NaiveBayes::new(dataset, 0.0).unwrap();
        let smoothed = nb.likelihood_table(Feature::Age).unwrap();
        let plain = raw.likelihood_table(Feature::Age).unwrap();
        assert_eq!(plain.get("OLD", "drugA"), Some(0.0));
        assert!(smoothed.get("OLD", "drugA").unwrap() > 0.0);
    }

    #[test]
    fn concurrent_predictions_share_one_dataset() {
        let nb = NaiveBayes::new(Arc::new(two_drug_dataset()), 1.0).unwrap();
        let q = Query::new("YOUNG", "HIGH", "NORMAL", "HIGH");
        let expected = nb.predict(&q).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let nb = nb.clone();
                let q = q.clone();
                thread::spawn(move || nb.predict(&q).unwrap())
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }
}
