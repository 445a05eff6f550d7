use serde::Serialize;

use crate::errors::PredictionError;

/// Binary churn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum ChurnLabel {
    Retained,
    Churned,
}

impl ChurnLabel {
    pub fn from_positive(positive: bool) -> Self {
        if positive {
            ChurnLabel::Churned
        } else {
            ChurnLabel::Retained
        }
    }

    /// The label as a pseudo-probability, used when a model has no estimator.
    pub fn as_probability(self) -> f64 {
        f64::from(u8::from(self))
    }
}

impl From<ChurnLabel> for u8 {
    fn from(label: ChurnLabel) -> Self {
        match label {
            ChurnLabel::Retained => 0,
            ChurnLabel::Churned => 1,
        }
    }
}

/// Per-column influence scores exposed by a trained model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureWeights<'a> {
    /// Tree-based impurity importances, non-negative.
    Importances(&'a [f64]),
    /// Linear coefficients for the positive class; the sign matters.
    Coefficients(&'a [f64]),
}

impl<'a> FeatureWeights<'a> {
    pub fn values(&self) -> &'a [f64] {
        match self {
            FeatureWeights::Importances(values) | FeatureWeights::Coefficients(values) => values,
        }
    }
}

/// A trained binary classifier over a fixed-width feature vector.
///
/// Implementations are immutable after load, so one instance serves every
/// form submission for the lifetime of the process.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<ChurnLabel, PredictionError>;

    /// Probability of churn, or `None` when the model has no estimator.
    fn predict_proba(&self, features: &[f64]) -> Result<Option<f64>, PredictionError>;

    fn feature_weights(&self) -> Option<FeatureWeights<'_>>;

    fn name(&self) -> &'static str;
}
