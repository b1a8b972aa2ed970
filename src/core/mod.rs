pub mod attributes;
pub mod dataset;
pub mod instances;
