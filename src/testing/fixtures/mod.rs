mod datasets;

pub use datasets::{drug_abc_dataset, symmetric_dataset, two_drug_dataset};
