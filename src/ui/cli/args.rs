use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::config::{KeyValue, Settings, parse_key_value};
use crate::core::instances::Query;
use crate::reports::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Recommend a drug category from patient attributes with Naive Bayes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the dataset summary, priors and per-feature likelihood tables
    Analyze,
    /// Predict the drug category for one patient without prompting
    Predict(PredictArgs),
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// JSON settings file (data, alpha, format)
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Labeled CSV dataset (Age, BP, Cholesterol, Na_to_K, class)
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Laplace smoothing constant (>= 0)
    #[arg(long, global = true, value_name = "ALPHA")]
    pub alpha: Option<f64>,

    /// Output format for reports
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Override a setting (key=value), applied after the config file
    #[arg(long = "set", global = true, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<KeyValue>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Age band (YOUNG / ADULT / OLD)
    #[arg(long, value_name = "AGE")]
    pub age: String,

    /// Blood pressure (LOW / NORMAL / HIGH)
    #[arg(long, value_name = "BP")]
    pub bp: String,

    /// Cholesterol (NORMAL / HIGH)
    #[arg(long, value_name = "LEVEL")]
    pub cholesterol: String,

    /// Sodium-to-potassium band (LOW / NORMAL / HIGH)
    #[arg(long, value_name = "BAND")]
    pub na_to_k: String,
}

impl PredictArgs {
    pub fn to_query(&self) -> Query {
        Query::new(&self.age, &self.bp, &self.cholesterol, &self.na_to_k).normalized()
    }
}

impl CommonArgs {
    /// Config file and `--set` overrides first, explicit flags last.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::resolve(self.config.as_deref(), &self.overrides)?;

        if let Some(data) = &self.data {
            settings.data = data.clone();
        }
        if let Some(alpha) = self.alpha {
            settings.alpha = alpha;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
