pub mod classifiers;
pub mod config;
pub mod core;
pub mod loaders;
pub mod reports;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
