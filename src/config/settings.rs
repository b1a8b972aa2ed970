use crate::classifiers::bayes::check_alpha;
use crate::config::{KeyValue, apply_overrides};
use crate::reports::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "drug200.csv";
pub const DEFAULT_ALPHA: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// CSV file with Age, BP, Cholesterol, Na_to_K and class columns.
    pub data: PathBuf,
    /// Laplace smoothing constant.
    pub alpha: f64,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            alpha: DEFAULT_ALPHA,
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Defaults, then the optional JSON file, then `KEY=VALUE` overrides.
    pub fn resolve(config_file: Option<&Path>, overrides: &[KeyValue]) -> Result<Settings> {
        let mut doc = match config_file {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str::<Value>(&raw)
                    .with_context(|| format!("invalid JSON in {}", path.display()))?
            }
            None => Value::Object(Default::default()),
        };

        apply_overrides(&mut doc, overrides)?;

        let settings: Settings =
            serde_json::from_value(doc).context("invalid settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        check_alpha(self.alpha).context("invalid 'alpha' setting")?;
        Ok(())
    }
}
