mod analysis;
mod format;
mod prediction;

pub use analysis::{AnalysisReport, DatasetSummary, PriorRow};
pub use format::{OutputFormat, TextReport, render};
pub use prediction::{PredictionReport, ProbabilityRow};

#[inline]
pub(crate) fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}
