use crate::classifiers::bayes::{Confidence, Prediction};
use crate::core::attributes::{Feature, Observation};
use crate::core::instances::Query;
use crate::reports::{TextReport, round_to};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityRow {
    pub class: String,
    pub probability: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub query: Query,
    /// Sorted by descending probability.
    pub probabilities: Vec<ProbabilityRow>,
    pub predicted_class: String,
    pub confidence: Confidence,
    pub degenerate: bool,
}

impl PredictionReport {
    pub fn new(query: &Query, prediction: &Prediction) -> Self {
        let probabilities = prediction
            .posterior()
            .sorted_descending()
            .into_iter()
            .map(|(class, p)| ProbabilityRow {
                class: class.to_string(),
                probability: round_to(p, 4),
                percent: round_to(p * 100.0, 2),
            })
            .collect();

        Self {
            query: query.clone(),
            probabilities,
            predicted_class: prediction.predicted_class().to_string(),
            confidence: prediction.confidence(),
            degenerate: prediction.is_degenerate(),
        }
    }
}

impl TextReport for PredictionReport {
    fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Input");
        for f in Feature::ALL {
            let _ = writeln!(out, "  {:<12} {}", f.to_string(), self.query.value_of(f));
        }
        out.push('\n');

        let class_w = self
            .probabilities
            .iter()
            .map(|r| r.class.len())
            .chain(std::iter::once("class".len()))
            .max()
            .unwrap_or(5);
        let _ = writeln!(out, "Class probabilities");
        let _ = writeln!(out, "  {:<class_w$}  {:>11}  {:>8}", "class", "probability", "percent");
        for row in &self.probabilities {
            let _ = writeln!(
                out,
                "  {:<class_w$}  {:>11.4}  {:>7.2}%",
                row.class, row.probability, row.percent
            );
        }
        out.push('\n');

        let _ = writeln!(out, "Recommended drug: {}", self.predicted_class);
        let _ = writeln!(
            out,
            "Confidence: {}% ({})",
            self.confidence.percent, self.confidence.level
        );
        if self.confidence.advisory {
            let _ = writeln!(
                out,
                "Confidence is relatively low; consult medical staff before acting on this result."
            );
        }
        if self.degenerate {
            let _ = writeln!(
                out,
                "Warning: every class scored zero; the recommendation is a tie-break, not an estimate."
            );
        }
        out
    }
}
