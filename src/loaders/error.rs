use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV input: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("CSV input has no header row")]
    NoHeader,
}
