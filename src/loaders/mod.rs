pub mod csv;
mod error;

pub use error::LoadError;
