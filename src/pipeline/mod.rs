//! From a submitted record to a churn prediction and the model's top features.

mod importance;
mod predictor;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod stub;

pub use importance::{rank_features, FeatureScore, ImportanceChart, ImportanceKind};
pub use predictor::{ChurnPipeline, PredictionResult, RiskLevel};
