use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};
use std::io::Write;
use strum::EnumMessage;

use crate::classifiers::Classifier;
use crate::core::attributes::Feature;
use crate::core::instances::Query;
use crate::reports::{OutputFormat, PredictionReport, render};
use crate::ui::cli::drivers::PromptDriver;

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Menu entry that switches to free-text input.
pub const OTHER_VALUE: &str = "other (type a value)";

pub fn banner(alpha: f64, classes: &[String]) -> String {
    let now = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        "{BOLD}{FG_CYAN}▶ Drug classification{RESET}  {DIM}alpha={alpha}  {now}{RESET}\n  classes: {}",
        classes.join(", ")
    )
}

/// Suggested values first, then any other value seen in the training data.
fn menu_for<C: Classifier>(classifier: &C, feature: Feature) -> Vec<String> {
    let mut menu: Vec<String> = feature
        .suggested_values()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for value in classifier.feature_domain(feature) {
        if !menu.contains(&value) {
            menu.push(value);
        }
    }
    menu.push(OTHER_VALUE.to_string());
    menu
}

pub fn prompt_query<D: PromptDriver, C: Classifier>(driver: &D, classifier: &C) -> Result<Query> {
    let mut answers = Vec::with_capacity(Feature::ALL.len());

    for feature in Feature::ALL {
        let title = feature.get_message().unwrap_or("Value");
        let help = feature.get_detailed_message().unwrap_or("");
        let menu = menu_for(classifier, feature);

        let picked = driver
            .ask_select(title, help, &menu)
            .with_context(|| format!("failed while prompting for {feature}"))?;

        let value = if picked == OTHER_VALUE {
            driver.ask_string(title, "Free text, stored upper-cased", "")?
        } else {
            picked
        };
        answers.push(value);
    }

    let [age, bp, cholesterol, na_to_k]: [String; 4] = answers
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected one answer per feature"))?;
    Ok(Query::new(age, bp, cholesterol, na_to_k).normalized())
}

/// Ask, predict, report, repeat until the user declines. Each round is an
/// independent request; returns how many predictions were made.
pub fn run_session<D, C, W>(
    driver: &D,
    classifier: &C,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize>
where
    D: PromptDriver,
    C: Classifier,
    W: Write,
{
    let mut served = 0;
    loop {
        let query = prompt_query(driver, classifier)?;
        let prediction = classifier
            .predict(&query)
            .with_context(|| format!("prediction failed for {query:?}"))?;

        let report = PredictionReport::new(&query, &prediction);
        writeln!(out, "\n{}", render(&report, format)?)?;
        served += 1;

        if !driver.ask_bool("Test another patient?", "", false)? {
            writeln!(out, "Done.")?;
            return Ok(served);
        }
    }
}
