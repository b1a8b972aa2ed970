use crate::classifiers::ClassifierError;
use crate::classifiers::bayes::PriorTable;
use crate::core::attributes::Feature;
use crate::core::dataset::Dataset;
use log::debug;
use serde::Serialize;

pub fn check_alpha(alpha: f64) -> Result<(), ClassifierError> {
    if alpha.is_finite() && alpha >= 0.0 {
        Ok(())
    } else {
        Err(ClassifierError::InvalidSmoothing(alpha))
    }
}

/// Unsmoothed class frequencies: `count(class) / len(dataset)`.
pub fn compute_prior(dataset: &Dataset) -> Result<PriorTable, ClassifierError> {
    if dataset.is_empty() {
        return Err(ClassifierError::EmptyDataset);
    }

    let total = dataset.len() as f64;
    let priors: PriorTable = dataset
        .class_counts()
        .into_iter()
        .map(|(class, count)| (class, count as f64 / total))
        .collect();

    debug!("priors over {} records: {:?}", dataset.len(), priors);
    Ok(priors)
}

/// Laplace-smoothed `P(feature = value | class)`:
///
/// `(match + alpha) / (class_total + alpha * k)`
///
/// where `k` is the number of distinct values `feature` takes over the whole
/// dataset, not only within `target_class`. A class with no records and
/// `alpha == 0` yields `0.0`.
pub fn compute_likelihood(
    dataset: &Dataset,
    feature: Feature,
    value: &str,
    target_class: &str,
    alpha: f64,
) -> Result<f64, ClassifierError> {
    check_alpha(alpha)?;
    if dataset.is_empty() {
        return Err(ClassifierError::EmptyDataset);
    }

    let (class_total, matched) = dataset.count_matches(feature, value, target_class);
    let k = dataset.unique_values(feature).len();

    Ok(smoothed_ratio(matched, class_total, k, alpha))
}

#[inline]
fn smoothed_ratio(matched: usize, class_total: usize, k: usize, alpha: f64) -> f64 {
    let (m, n, k) = (matched as f64, class_total as f64, k as f64);
    let denominator = n + alpha * k;
    if denominator == 0.0 {
        return 0.0;
    }
    if !denominator.is_finite() {
        // alpha * k overflowed; divide through by alpha instead.
        return (m / alpha + 1.0) / (n / alpha + k);
    }
    (m + alpha) / denominator
}

/// Likelihood of every observed value of one feature under every class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikelihoodTable {
    feature: Feature,
    alpha: f64,
    values: Vec<String>,
    classes: Vec<String>,
    /// `cells[value_idx][class_idx]`
    cells: Vec<Vec<f64>>,
}

impl LikelihoodTable {
    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn get(&self, value: &str, class_label: &str) -> Option<f64> {
        let v = self.values.iter().position(|x| x == value)?;
        let c = self.classes.iter().position(|x| x == class_label)?;
        Some(self.cells[v][c])
    }

    /// One row per feature value, one column per class.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.values
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}

pub fn compute_likelihood_table(
    dataset: &Dataset,
    feature: Feature,
    alpha: f64,
) -> Result<LikelihoodTable, ClassifierError> {
    check_alpha(alpha)?;
    if dataset.is_empty() {
        return Err(ClassifierError::EmptyDataset);
    }

    let values: Vec<String> = dataset.unique_values(feature).into_iter().collect();
    let classes: Vec<String> = dataset.class_labels().into_iter().collect();

    let mut cells = Vec::with_capacity(values.len());
    for value in &values {
        let mut row = Vec::with_capacity(classes.len());
        for class in &classes {
            row.push(compute_likelihood(dataset, feature, value, class, alpha)?);
        }
        cells.push(row);
    }

    Ok(LikelihoodTable {
        feature,
        alpha,
        values,
        classes,
        cells,
    })
}
