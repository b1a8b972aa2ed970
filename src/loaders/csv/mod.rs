mod csv_dataset_loader;

pub use csv_dataset_loader::{CsvDatasetLoader, EXPECTED_FIELDS, LoadSummary};
