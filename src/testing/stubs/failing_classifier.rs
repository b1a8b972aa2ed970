use crate::classifiers::bayes::Prediction;
use crate::classifiers::{Classifier, ClassifierError};
use crate::core::attributes::Feature;
use crate::core::instances::Query;

/// Behaves like a classifier trained on nothing.
#[derive(Default)]
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _query: &Query) -> Result<Prediction, ClassifierError> {
        Err(ClassifierError::EmptyDataset)
    }

    fn class_labels(&self) -> Vec<String> {
        Vec::new()
    }

    fn feature_domain(&self, _feature: Feature) -> Vec<String> {
        Vec::new()
    }
}
