use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("dataset is empty, priors and likelihoods are undefined")]
    EmptyDataset,
    #[error("smoothing constant must be finite and non-negative, got {0}")]
    InvalidSmoothing(f64),
}
