use crate::classifiers::ClassifierError;
use crate::classifiers::bayes::{
    ClassDistribution, Confidence, Posterior, check_alpha, compute_likelihood, compute_prior,
};
use crate::core::attributes::{Feature, Observation};
use crate::core::dataset::Dataset;
use log::{debug, warn};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    predicted_class: String,
    posterior: Posterior,
    /// `prior × Π likelihood` per class, before normalization.
    scores: ClassDistribution,
    degenerate: bool,
}

impl Prediction {
    pub fn predicted_class(&self) -> &str {
        &self.predicted_class
    }

    pub fn posterior(&self) -> &Posterior {
        &self.posterior
    }

    pub fn scores(&self) -> &ClassDistribution {
        &self.scores
    }

    /// True when every class scored zero. The posterior is then all zeros and
    /// `predicted_class` is only the tie-break winner, not an estimate.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn max_probability(&self) -> f64 {
        self.posterior.get(&self.predicted_class).unwrap_or(0.0)
    }

    pub fn confidence(&self) -> Confidence {
        Confidence::from_probability(self.max_probability())
    }
}

/// Naive Bayes prediction: each class scores `prior × Π P(value | class)`
/// over the four features, scores are normalized into a posterior, and the
/// argmax (ties to the smallest label) is returned.
pub fn predict<O: Observation>(
    dataset: &Dataset,
    query: &O,
    alpha: f64,
) -> Result<Prediction, ClassifierError> {
    check_alpha(alpha)?;
    let priors = compute_prior(dataset)?;

    let mut scores = Vec::with_capacity(priors.len());
    for (class, prior) in priors.iter() {
        let mut score = prior;
        for feature in Feature::ALL {
            score *= compute_likelihood(dataset, feature, query.value_of(feature), class, alpha)?;
        }
        scores.push((class.to_string(), score));
    }
    let scores: ClassDistribution = scores.into_iter().collect();
    debug!("unnormalized scores (alpha={alpha}): {:?}", scores);

    let total = scores.sum();
    let degenerate = total <= 0.0;

    let posterior: Posterior = if degenerate {
        warn!("all classes scored zero (alpha={alpha}); prediction is not authoritative");
        scores.classes().map(|c| (c.to_string(), 0.0)).collect()
    } else {
        scores.iter().map(|(c, s)| (c.to_string(), s / total)).collect()
    };

    let predicted_class = posterior
        .argmax()
        .map(|(c, _)| c.to_string())
        .ok_or(ClassifierError::EmptyDataset)?;

    Ok(Prediction {
        predicted_class,
        posterior,
        scores,
        degenerate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::bayes::ConfidenceLevel;
    use crate::core::instances::{Query, Record};
    use crate::testing::fixtures::{drug_abc_dataset, symmetric_dataset, two_drug_dataset};

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn end_to_end_two_drugs() {
        let ds = two_drug_dataset();
        let q = Query::new("YOUNG", "HIGH", "NORMAL", "HIGH");

        let pred = predict(&ds, &q, 1.0).unwrap();
        assert_eq!(pred.predicted_class(), "DrugA");
        let a = pred.posterior().get("DrugA").unwrap();
        let b = pred.posterior().get("DrugB").unwrap();
        assert!(a > b, "a={a} b={b}");
        assert!(!pred.is_degenerate());

        // DrugA: 0.5 * (6/7)^2 * 1 * 1, DrugB: 0.5 * (1/7)^2
        assert!(approx(a, 36.0 / 37.0, 1e-12));
        assert!(approx(b, 1.0 / 37.0, 1e-12));
    }

    #[test]
    fn posterior_sums_to_one() {
        let ds = drug_abc_dataset();
        let queries = [
            Query::new("YOUNG", "HIGH", "HIGH", "HIGH"),
            Query::new("OLD", "LOW", "NORMAL", "LOW"),
            Query::new("ADULT", "NORMAL", "HIGH", "NORMAL"),
            Query::new("UNKNOWN", "???", "HIGH", "LOW"),
        ];
        for alpha in [0.1, 0.5, 1.0, 2.0] {
            for q in &queries {
                let pred = predict(&ds, q, alpha).unwrap();
                assert!(!pred.is_degenerate());
                assert!(approx(pred.posterior().sum(), 1.0, EPS));
                assert_eq!(pred.posterior().len(), 3);
            }
        }
    }

    #[test]
    fn scores_are_prior_times_likelihoods() {
        let ds = drug_abc_dataset();
        let q = Query::new("YOUNG", "HIGH", "HIGH", "HIGH");
        let pred = predict(&ds, &q, 1.0).unwrap();

        let priors = compute_prior(&ds).unwrap();
        for class in ["drugA", "drugB", "drugC"] {
            let mut expected = priors.get(class).unwrap();
            for f in Feature::ALL {
                expected *= compute_likelihood(&ds, f, q.value_of(f), class, 1.0).unwrap();
            }
            assert!(approx(pred.scores().get(class).unwrap(), expected, 1e-15));
        }
    }

    #[test]
    fn predictions_are_deterministic() {
        let ds = drug_abc_dataset();
        let q = Query::new("ADULT", "LOW", "HIGH", "NORMAL");
        let first = predict(&ds, &q, 0.5).unwrap();
        for _ in 0..10 {
            assert_eq!(predict(&ds, &q, 0.5).unwrap(), first);
        }
    }

    #[test]
    fn ties_resolve_to_smallest_label_under_reordering() {
        let ds = symmetric_dataset();
        let q = Query::new("ADULT", "NORMAL", "HIGH", "NORMAL");

        let pred = predict(&ds, &q, 1.0).unwrap();
        assert!(approx(pred.posterior().get("drugX").unwrap(), 0.5, EPS));
        assert!(approx(pred.posterior().get("drugY").unwrap(), 0.5, EPS));
        assert_eq!(pred.predicted_class(), "drugX");

        let reversed: Dataset = ds.records().iter().rev().cloned().collect();
        for _ in 0..5 {
            assert_eq!(predict(&reversed, &q, 1.0).unwrap().predicted_class(), "drugX");
        }
    }

    #[test]
    fn zero_alpha_unseen_value_zeroes_that_class() {
        let ds = two_drug_dataset();
        // OLD never occurs for DrugA, HIGH BP never occurs for DrugB.
        let q = Query::new("OLD", "LOW", "NORMAL", "HIGH");
        let pred = predict(&ds, &q, 0.0).unwrap();
        assert_eq!(pred.scores().get("DrugA"), Some(0.0));
        assert!(pred.scores().get("DrugB").unwrap() > 0.0);
        assert_eq!(pred.predicted_class(), "DrugB");
        assert!(!pred.is_degenerate());
    }

    #[test]
    fn zero_alpha_all_classes_zero_is_degenerate() {
        let ds = two_drug_dataset();
        let q = Query::new("YOUNG", "LOW", "NORMAL", "HIGH");
        let pred = predict(&ds, &q, 0.0).unwrap();

        assert!(pred.is_degenerate());
        assert!(pred.posterior().iter().all(|(_, p)| p == 0.0));
        assert_eq!(pred.predicted_class(), "DrugA");
        assert_eq!(pred.confidence().level, ConfidenceLevel::Low);
        assert!(pred.confidence().advisory);
    }

    #[test]
    fn huge_alpha_is_not_degenerate() {
        let ds = two_drug_dataset();
        let q = Query::new("YOUNG", "HIGH", "NORMAL", "HIGH");
        let pred = predict(&ds, &q, 1e308).unwrap();
        assert!(!pred.is_degenerate());
        assert!(approx(pred.posterior().sum(), 1.0, EPS));
        // Smoothing swamps the counts, leaving the equal priors.
        assert!(approx(pred.posterior().get("DrugA").unwrap(), 0.5, 1e-9));
        assert_eq!(pred.predicted_class(), "DrugA");
    }

    #[test]
    fn unseen_query_values_degrade_gracefully_with_smoothing() {
        let ds = two_drug_dataset();
        let q = Query::new("TODDLER", "EXTREME", "NONE", "???");
        let pred = predict(&ds, &q, 1.0).unwrap();
        assert!(!pred.is_degenerate());
        // Both classes equally unsupported: posterior matches the priors.
        assert!(approx(pred.posterior().get("DrugA").unwrap(), 0.5, EPS));
    }

    #[test]
    fn confidence_reflects_winner() {
        let ds = two_drug_dataset();
        let q = Query::new("YOUNG", "HIGH", "NORMAL", "HIGH");
        let c = predict(&ds, &q, 1.0).unwrap().confidence();
        assert_eq!(c.level, ConfidenceLevel::High);
        assert!(!c.advisory);
        assert!(approx(c.percent, 97.3, 1e-9));
    }

    #[test]
    fn errors_surface_to_caller() {
        let q = Query::new("YOUNG", "HIGH", "NORMAL", "HIGH");
        assert_eq!(
            predict(&Dataset::default(), &q, 1.0),
            Err(ClassifierError::EmptyDataset)
        );
        let ds = two_drug_dataset();
        assert_eq!(predict(&ds, &q, -1.0), Err(ClassifierError::InvalidSmoothing(-1.0)));
    }

    #[test]
    fn records_can_be_used_as_queries() {
        let ds = two_drug_dataset();
        let r = Record::new("OLD", "LOW", "NORMAL", "HIGH", "ignored").unwrap();
        assert_eq!(predict(&ds, &r, 1.0).unwrap().predicted_class(), "DrugB");
    }
}
