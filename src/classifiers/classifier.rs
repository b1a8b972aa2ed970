use crate::classifiers::ClassifierError;
use crate::classifiers::bayes::Prediction;
use crate::core::attributes::Feature;
use crate::core::instances::Query;

pub trait Classifier {
    fn predict(&self, query: &Query) -> Result<Prediction, ClassifierError>;
    fn class_labels(&self) -> Vec<String>;
    /// Values observed for `feature` in the training data, sorted.
    fn feature_domain(&self, feature: Feature) -> Vec<String>;
}
