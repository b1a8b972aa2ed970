mod confidence;
mod distribution;
mod estimator;
mod naive_bayes;
mod predictor;

pub use confidence::{Confidence, ConfidenceLevel};
pub use distribution::{ClassDistribution, Posterior, PriorTable};
pub use estimator::{
    LikelihoodTable, check_alpha, compute_likelihood, compute_likelihood_table, compute_prior,
};
pub use naive_bayes::NaiveBayes;
pub use predictor::{Prediction, predict};
