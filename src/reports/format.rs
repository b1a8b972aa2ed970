use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait TextReport {
    fn to_text(&self) -> String;
}

pub fn render<R: TextReport + Serialize>(
    report: &R,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}
