// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Classifier kinds a model artifact can carry.
//!
//! Each kind mirrors what the training side exports for a fitted estimator:
//! linear models ship their coefficients, tree models ship flattened nodes
//! and optionally their impurity importances.

use serde::{Deserialize, Serialize};

use super::tree::{leaf_probability, TreeNode};
use crate::errors::PredictionError;
use crate::traits::{ChurnLabel, Classifier, FeatureWeights};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Decision `coef·x + intercept > 0`; probability via the logistic function.
    LogisticRegression { coef: Vec<f64>, intercept: f64 },

    /// Same decision rule, but no probability estimator.
    LinearSvc { coef: Vec<f64>, intercept: f64 },

    DecisionTree {
        nodes: Vec<TreeNode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature_importances: Option<Vec<f64>>,
    },

    /// Soft-voting forest: churn probability is the mean of the trees' leaf shares.
    RandomForest {
        trees: Vec<Vec<TreeNode>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature_importances: Option<Vec<f64>>,
    },
}

fn ensure_finite(features: &[f64]) -> Result<(), PredictionError> {
    match features.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(PredictionError::NonFiniteInput { index }),
        None => Ok(()),
    }
}

fn decision_function(coef: &[f64], intercept: f64, features: &[f64]) -> Result<f64, PredictionError> {
    if coef.len() != features.len() {
        return Err(PredictionError::DimensionMismatch {
            expected: coef.len(),
            actual: features.len(),
        });
    }
    ensure_finite(features)?;

    let z = coef
        .iter()
        .zip(features)
        .map(|(w, x)| w * x)
        .sum::<f64>()
        + intercept;
    Ok(z)
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl ModelSpec {
    fn churn_probability(&self, features: &[f64]) -> Result<Option<f64>, PredictionError> {
        let probability = match self {
            ModelSpec::LogisticRegression { coef, intercept } => {
                sigmoid(decision_function(coef, *intercept, features)?)
            }
            ModelSpec::LinearSvc { .. } => return Ok(None),
            ModelSpec::DecisionTree { nodes, .. } => {
                ensure_finite(features)?;
                leaf_probability(nodes, features)?
            }
            ModelSpec::RandomForest { trees, .. } => {
                if trees.is_empty() {
                    return Err(PredictionError::EmptyEnsemble);
                }
                ensure_finite(features)?;
                let mut total = 0.0;
                for nodes in trees {
                    total += leaf_probability(nodes, features)?;
                }
                total / trees.len() as f64
            }
        };

        if probability.is_finite() {
            Ok(Some(probability))
        } else {
            Err(PredictionError::NonFiniteProbability)
        }
    }
}

impl Classifier for ModelSpec {
    fn predict(&self, features: &[f64]) -> Result<ChurnLabel, PredictionError> {
        match self {
            ModelSpec::LogisticRegression { coef, intercept }
            | ModelSpec::LinearSvc { coef, intercept } => {
                let z = decision_function(coef, *intercept, features)?;
                Ok(ChurnLabel::from_positive(z > 0.0))
            }
            // Ties between the two classes resolve to the first one, i.e. retained.
            ModelSpec::DecisionTree { .. } | ModelSpec::RandomForest { .. } => {
                let probability = self.churn_probability(features)?.unwrap_or(0.0);
                Ok(ChurnLabel::from_positive(probability > 0.5))
            }
        }
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Option<f64>, PredictionError> {
        self.churn_probability(features)
    }

    fn feature_weights(&self) -> Option<FeatureWeights<'_>> {
        match self {
            ModelSpec::LogisticRegression { coef, .. } | ModelSpec::LinearSvc { coef, .. } => {
                Some(FeatureWeights::Coefficients(coef))
            }
            ModelSpec::DecisionTree {
                feature_importances, ..
            }
            | ModelSpec::RandomForest {
                feature_importances, ..
            } => feature_importances
                .as_deref()
                .map(FeatureWeights::Importances),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ModelSpec::LogisticRegression { .. } => "logistic_regression",
            ModelSpec::LinearSvc { .. } => "linear_svc",
            ModelSpec::DecisionTree { .. } => "decision_tree",
            ModelSpec::RandomForest { .. } => "random_forest",
        }
    }
}
