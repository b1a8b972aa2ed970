use crate::core::attributes::Feature;
use crate::core::dataset::Dataset;
use crate::core::instances::Record;
use crate::loaders::LoadError;
use csv::{ReaderBuilder, StringRecord};
use log::{info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Age, BP, Cholesterol, Na_to_K, class.
pub const EXPECTED_FIELDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadSummary {
    /// Data rows seen, header excluded.
    pub rows_read: usize,
    pub rows_skipped: usize,
    /// Blank feature or label cells across all rows with the right field count.
    pub missing_cells: usize,
}

/// Reads labeled records from CSV. Columns are positional and the header
/// row's names are ignored.
#[derive(Debug)]
pub struct CsvDatasetLoader {
    path: PathBuf,
}

impl CsvDatasetLoader {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<(Dataset, LoadSummary), LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let loaded = Self::load_from_reader(file)?;
        info!(
            "loaded {} records from {} ({} rows skipped)",
            loaded.0.len(),
            self.path().display(),
            loaded.1.rows_skipped
        );
        Ok(loaded)
    }

    pub fn load_from_reader<R: Read>(reader: R) -> Result<(Dataset, LoadSummary), LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        if rdr.headers()?.is_empty() {
            return Err(LoadError::NoHeader);
        }

        let mut summary = LoadSummary::default();
        let mut records = Vec::new();

        for row in rdr.records() {
            let row = row?;
            summary.rows_read += 1;
            summary.missing_cells += count_missing_cells(&row);

            match parse_row(&row) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    summary.rows_skipped += 1;
                    let line = row.position().map(|p| p.line()).unwrap_or_default();
                    warn!("skipping CSV line {line}: {reason}");
                }
            }
        }

        Ok((Dataset::new(records), summary))
    }
}

fn count_missing_cells(row: &StringRecord) -> usize {
    if row.len() != EXPECTED_FIELDS {
        return 0;
    }
    row.iter().filter(|cell| cell.trim().is_empty()).count()
}

fn parse_row(row: &StringRecord) -> Result<Record, String> {
    if row.len() != EXPECTED_FIELDS {
        return Err(format!(
            "expected {EXPECTED_FIELDS} fields, found {}",
            row.len()
        ));
    }

    for (i, feature) in Feature::ALL.iter().enumerate() {
        if row.get(i).unwrap_or_default().trim().is_empty() {
            return Err(format!("missing value for {feature}"));
        }
    }

    let feature = |i: usize| row.get(i).unwrap_or_default().trim().to_uppercase();
    let label = row.get(4).unwrap_or_default().trim();

    Record::new(feature(0), feature(1), feature(2), feature(3), label).map_err(|e| e.to_string())
}
