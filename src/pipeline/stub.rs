// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test doubles for the classifier seam, plus the reference column layout.

use std::sync::Mutex;

use crate::artifact::ScalerSpec;
use crate::errors::PredictionError;
use crate::traits::{ChurnLabel, Classifier, FeatureWeights};

pub static IDENTITY: ScalerSpec = ScalerSpec::Identity;

/// Columns of the bundled models: the numerics, then each one-hot group with
/// its values in sorted order.
pub fn telco_columns() -> Vec<String> {
    let mut columns: Vec<String> = ["SeniorCitizen", "tenure", "MonthlyCharges", "TotalCharges"]
        .iter()
        .map(|c| c.to_string())
        .collect();

    let add_ons = ["No", "No internet service", "Yes"];
    let groups: [(&str, &[&str]); 15] = [
        ("gender", &["Female", "Male"]),
        ("Partner", &["No", "Yes"]),
        ("Dependents", &["No", "Yes"]),
        ("PhoneService", &["No", "Yes"]),
        ("MultipleLines", &["No", "No phone service", "Yes"]),
        ("InternetService", &["DSL", "Fiber optic", "No"]),
        ("OnlineSecurity", &add_ons),
        ("OnlineBackup", &add_ons),
        ("DeviceProtection", &add_ons),
        ("TechSupport", &add_ons),
        ("StreamingTV", &add_ons),
        ("StreamingMovies", &add_ons),
        ("Contract", &["Month-to-month", "One year", "Two year"]),
        ("PaperlessBilling", &["No", "Yes"]),
        (
            "PaymentMethod",
            &[
                "Bank transfer (automatic)",
                "Credit card (automatic)",
                "Electronic check",
                "Mailed check",
            ],
        ),
    ];
    for (prefix, values) in groups {
        for value in values {
            columns.push(format!("{}_{}", prefix, value));
        }
    }
    columns
}

/// Returns a fixed answer and remembers the last vector it was given.
pub struct StubClassifier {
    label: ChurnLabel,
    probability: Option<f64>,
    last_input: Mutex<Option<Vec<f64>>>,
}

impl StubClassifier {
    pub fn label_only(label: ChurnLabel) -> Self {
        Self {
            label,
            probability: None,
            last_input: Mutex::new(None),
        }
    }

    pub fn with_probability(label: ChurnLabel, probability: f64) -> Self {
        Self {
            probability: Some(probability),
            ..Self::label_only(label)
        }
    }

    pub fn last_input(&self) -> Option<Vec<f64>> {
        self.last_input.lock().unwrap().clone()
    }
}

impl Classifier for StubClassifier {
    fn predict(&self, features: &[f64]) -> Result<ChurnLabel, PredictionError> {
        *self.last_input.lock().unwrap() = Some(features.to_vec());
        Ok(self.label)
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<Option<f64>, PredictionError> {
        Ok(self.probability)
    }

    fn feature_weights(&self) -> Option<FeatureWeights<'_>> {
        None
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// A classifier that always fails, for exercising the error paths.
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, features: &[f64]) -> Result<ChurnLabel, PredictionError> {
        Err(PredictionError::DimensionMismatch {
            expected: features.len() + 1,
            actual: features.len(),
        })
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Option<f64>, PredictionError> {
        self.predict(features).map(|_| None)
    }

    fn feature_weights(&self) -> Option<FeatureWeights<'_>> {
        None
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_telco_columns_match_bundled_models() {
        let columns = telco_columns();
        assert_eq!(columns.len(), 45);
        assert_eq!(columns.iter().collect::<HashSet<_>>().len(), 45);

        let bundled = std::fs::read_to_string("models/churn_logreg.json").unwrap();
        let artifact = crate::artifact::parse_artifact(&bundled).unwrap();
        assert_eq!(artifact.columns, columns);
    }
}
