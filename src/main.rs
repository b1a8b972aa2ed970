use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use drugclass::classifiers::Classifier;
use drugclass::classifiers::bayes::NaiveBayes;
use drugclass::loaders::csv::CsvDatasetLoader;
use drugclass::reports::{AnalysisReport, PredictionReport, render};
use drugclass::ui::cli::args::{Cli, Command};
use drugclass::ui::cli::drivers::InquireDriver;
use drugclass::ui::cli::wizard::{banner, run_session};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.common.log_level()),
    )
    .init();

    let settings = cli.common.settings().context("failed to resolve settings")?;

    let (dataset, load_summary) = CsvDatasetLoader::from_path(&settings.data)
        .load()
        .with_context(|| format!("failed to load dataset from {}", settings.data.display()))?;

    let classifier = NaiveBayes::new(Arc::new(dataset), settings.alpha)
        .context("failed to construct classifier")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Command::Analyze) => {
            let report = AnalysisReport::build(&classifier, &load_summary)
                .context("failed to compute analysis tables")?;
            writeln!(out, "{}", render(&report, settings.format)?)?;
        }
        Some(Command::Predict(args)) => {
            let query = args.to_query();
            let prediction = classifier
                .predict(&query)
                .with_context(|| format!("prediction failed for {query:?}"))?;
            let report = PredictionReport::new(&query, &prediction);
            writeln!(out, "{}", render(&report, settings.format)?)?;
        }
        None => {
            writeln!(out, "{}", banner(settings.alpha, &classifier.class_labels()))?;
            out.flush()?;
            let driver = InquireDriver;
            run_session(&driver, &classifier, settings.format, &mut out)
                .context("interactive session failed")?;
        }
    }

    Ok(())
}
