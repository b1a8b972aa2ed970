mod failing_classifier;
mod scripted_driver;

pub use failing_classifier::FailingClassifier;
pub use scripted_driver::ScriptedDriver;
