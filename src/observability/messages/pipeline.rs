// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the scale and predict stages.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// Scaling failed; the model gets the unscaled vector instead.
///
/// # Log Level
/// `warn!` - Degraded accuracy
///
/// # Example
/// ```
/// use churn_dashboard::errors::ScalingError;
/// use churn_dashboard::observability::messages::pipeline::ScalingFallback;
///
/// let error = ScalingError::DimensionMismatch { expected: 44, actual: 45 };
/// let msg = ScalingFallback { scaler: "standard", error: &error };
///
/// assert!(msg.to_string().starts_with("Scaling with 'standard' failed"));
/// ```
pub struct ScalingFallback<'a> {
    pub scaler: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ScalingFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Scaling with '{}' failed, predicting on unscaled features: {}",
            self.scaler, self.error
        )
    }
}

impl StructuredLog for ScalingFallback<'_> {
    fn log(&self) {
        tracing::warn!(scaler = self.scaler, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("scaling_fallback", span_name = name, scaler = self.scaler)
    }
}

/// Prediction produced a label and probability.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PredictionCompleted<'a> {
    pub model: &'a str,
    pub label: u8,
    pub probability: f64,
    pub scaled: bool,
    pub duration: Duration,
}

impl Display for PredictionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Prediction by '{}': label={}, probability={:.4}, scaled={}, duration={:?}",
            self.model, self.label, self.probability, self.scaled, self.duration
        )
    }
}

impl StructuredLog for PredictionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            model = self.model,
            label = self.label,
            probability = self.probability,
            scaled = self.scaled,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "prediction",
            span_name = name,
            model = self.model,
            label = self.label,
            probability = self.probability,
        )
    }
}

/// Prediction failed. Shown inline; the session continues.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PredictionFailed<'a> {
    pub model: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for PredictionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Prediction by '{}' failed: {}", self.model, self.error)
    }
}

impl StructuredLog for PredictionFailed<'_> {
    fn log(&self) {
        tracing::error!(model = self.model, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("prediction_failed", span_name = name, model = self.model)
    }
}

/// The model exposes weights, but they cannot be lined up with the columns.
///
/// # Log Level
/// `warn!` - Insight section falls back to its "not supported" notice
pub struct ImportanceUnavailable<'a> {
    pub model: &'a str,
    pub weight_count: usize,
    pub column_count: usize,
}

impl Display for ImportanceUnavailable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Model '{}' exposes {} weights for {} columns; feature importance disabled",
            self.model, self.weight_count, self.column_count
        )
    }
}

impl StructuredLog for ImportanceUnavailable<'_> {
    fn log(&self) {
        tracing::warn!(
            model = self.model,
            weight_count = self.weight_count,
            column_count = self.column_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("importance_unavailable", span_name = name, model = self.model)
    }
}
