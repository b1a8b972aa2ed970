pub mod bayes;
mod classifier;
mod error;

pub use classifier::Classifier;
pub use error::ClassifierError;
