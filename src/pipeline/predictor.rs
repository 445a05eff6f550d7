use serde::Serialize;
use std::time::Instant;

use super::importance::{rank_features, ImportanceChart};
use crate::artifact::ModelArtifact;
use crate::encoding::{EncodingPlan, FeatureVector};
use crate::errors::PredictionError;
use crate::form::CustomerRecord;
use crate::observability::messages::pipeline::{
    PredictionCompleted, PredictionFailed, ScalingFallback,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{ChurnLabel, Classifier, Scaler};

/// Qualitative reading of a churn probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Low,
}

/// Outcome of one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: ChurnLabel,
    /// Churn probability in `[0, 1]`. Equals the label when `estimated` is false.
    pub probability: f64,
    /// Whether the probability came from the model's estimator.
    pub estimated: bool,
    /// Whether the model saw the scaled vector; false after a scaling fallback.
    pub scaled: bool,
}

impl PredictionResult {
    pub fn is_churn(&self) -> bool {
        self.label == ChurnLabel::Churned
    }

    /// High when the probability is strictly above `threshold`.
    pub fn risk(&self, threshold: f64) -> RiskLevel {
        if self.probability > threshold {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }
}

/// Encode, scale and predict for one model.
///
/// The encoding plan is resolved against the model's columns when the
/// pipeline is built, so each prediction is a table lookup plus the model.
pub struct ChurnPipeline<'a> {
    classifier: &'a dyn Classifier,
    scaler: &'a dyn Scaler,
    plan: EncodingPlan<'a>,
}

impl<'a> ChurnPipeline<'a> {
    pub fn new(artifact: &'a ModelArtifact) -> Self {
        Self::from_parts(&artifact.model, &artifact.scaler, &artifact.columns)
    }

    pub fn from_parts(
        classifier: &'a dyn Classifier,
        scaler: &'a dyn Scaler,
        columns: &'a [String],
    ) -> Self {
        Self {
            classifier,
            scaler,
            plan: EncodingPlan::new(columns),
        }
    }

    pub fn model_name(&self) -> &'static str {
        self.classifier.name()
    }

    pub fn plan(&self) -> &EncodingPlan<'a> {
        &self.plan
    }

    pub fn encode(&self, record: &CustomerRecord) -> FeatureVector<'a> {
        self.plan.encode(record)
    }

    pub fn predict(&self, record: &CustomerRecord) -> Result<PredictionResult, PredictionError> {
        let vector = self.encode(record);
        self.predict_vector(&vector)
    }

    /// Scale `vector` and run the classifier on it.
    ///
    /// A scaling failure is logged and the unscaled vector is used instead;
    /// only classifier errors are returned.
    pub fn predict_vector(
        &self,
        vector: &FeatureVector<'_>,
    ) -> Result<PredictionResult, PredictionError> {
        let start = Instant::now();

        let (input, scaled) = match self.scaler.transform(vector.as_slice()) {
            Ok(values) => (values, true),
            Err(error) => {
                ScalingFallback {
                    scaler: self.scaler.name(),
                    error: &error,
                }
                .log();
                (vector.as_slice().to_vec(), false)
            }
        };

        let result = self.run_classifier(&input, scaled);
        match &result {
            Ok(prediction) => PredictionCompleted {
                model: self.classifier.name(),
                label: u8::from(prediction.label),
                probability: prediction.probability,
                scaled,
                duration: start.elapsed(),
            }
            .log(),
            Err(error) => PredictionFailed {
                model: self.classifier.name(),
                error,
            }
            .log(),
        }
        result
    }

    fn run_classifier(&self, input: &[f64], scaled: bool) -> Result<PredictionResult, PredictionError> {
        let label = self.classifier.predict(input)?;
        let (probability, estimated) = match self.classifier.predict_proba(input)? {
            Some(p) if p.is_finite() => (p.clamp(0.0, 1.0), true),
            Some(_) => return Err(PredictionError::NonFiniteProbability),
            None => (label.as_probability(), false),
        };

        Ok(PredictionResult {
            label,
            probability,
            estimated,
            scaled,
        })
    }

    /// The model's most influential features, if it exposes any weights.
    pub fn importance(&self, top_n: usize) -> Option<ImportanceChart> {
        rank_features(self.classifier, self.plan.columns(), top_n)
    }
}
