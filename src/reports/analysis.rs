use crate::classifiers::ClassifierError;
use crate::classifiers::bayes::{LikelihoodTable, NaiveBayes};
use crate::core::attributes::Feature;
use crate::loaders::csv::LoadSummary;
use crate::reports::{TextReport, round_to};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub features: usize,
    pub classes: usize,
    pub skipped_rows: usize,
    pub missing_cells: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorRow {
    pub class: String,
    pub count: usize,
    pub prior: f64,
}

/// Everything the training/analysis view shows: the dataset summary, the
/// prior table and one likelihood table per feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summary: DatasetSummary,
    pub alpha: f64,
    pub priors: Vec<PriorRow>,
    pub likelihoods: Vec<LikelihoodTable>,
}

impl AnalysisReport {
    pub fn build(model: &NaiveBayes, load: &LoadSummary) -> Result<Self, ClassifierError> {
        let dataset = model.dataset();
        let priors = model.priors()?;
        let counts = dataset.class_counts();

        let priors = priors
            .iter()
            .map(|(class, p)| PriorRow {
                class: class.to_string(),
                count: counts.get(class).copied().unwrap_or(0),
                prior: round_to(p, 4),
            })
            .collect();

        let likelihoods = Feature::ALL
            .iter()
            .map(|f| model.likelihood_table(*f))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            summary: DatasetSummary {
                records: dataset.len(),
                features: dataset.number_of_features(),
                classes: dataset.number_of_classes(),
                skipped_rows: load.rows_skipped,
                missing_cells: load.missing_cells,
            },
            alpha: model.alpha(),
            priors,
            likelihoods,
        })
    }
}

fn write_likelihood_table(out: &mut String, table: &LikelihoodTable) {
    let first_w = table
        .values()
        .iter()
        .map(String::len)
        .chain(std::iter::once("value".len()))
        .max()
        .unwrap_or(5);
    let widths: Vec<usize> = table.classes().iter().map(|c| c.len().max(6)).collect();

    let _ = writeln!(out, "Likelihood: {} (alpha={})", table.feature(), table.alpha());
    let _ = write!(out, "  {:<first_w$}", "value");
    for (class, w) in table.classes().iter().zip(widths.iter().copied()) {
        let _ = write!(out, "  {class:>w$}");
    }
    out.push('\n');

    for (value, row) in table.rows() {
        let _ = write!(out, "  {value:<first_w$}");
        for (p, w) in row.iter().zip(widths.iter().copied()) {
            let _ = write!(out, "  {:>w$.4}", p);
        }
        out.push('\n');
    }
}

impl TextReport for AnalysisReport {
    fn to_text(&self) -> String {
        let mut out = String::new();
        let s = &self.summary;

        let _ = writeln!(out, "Dataset summary");
        let _ = writeln!(out, "  records       {}", s.records);
        let _ = writeln!(out, "  features      {}", s.features);
        let _ = writeln!(out, "  classes       {}", s.classes);
        let _ = writeln!(out, "  skipped rows  {}", s.skipped_rows);
        let _ = writeln!(out, "  missing cells {}", s.missing_cells);
        out.push('\n');

        let class_w = self
            .priors
            .iter()
            .map(|r| r.class.len())
            .chain(std::iter::once("class".len()))
            .max()
            .unwrap_or(5);
        let _ = writeln!(out, "Prior probabilities");
        let _ = writeln!(out, "  {:<class_w$}  {:>5}  {:>6}", "class", "count", "prior");
        for row in &self.priors {
            let _ = writeln!(
                out,
                "  {:<class_w$}  {:>5}  {:>6.4}",
                row.class, row.count, row.prior
            );
        }

        for table in &self.likelihoods {
            out.push('\n');
            write_likelihood_table(&mut out, table);
        }
        out
    }
}
