// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for the scale and predict stages.
//!
//! Neither is fatal for the session. A `ScalingError` makes the pipeline fall
//! back to the unscaled vector; a `PredictionError` is rendered inline.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScalingError {
    /// The scaler was fitted on a different number of columns.
    #[error("Scaler expects {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Scaling produced NaN or infinity.
    #[error("Scaled value for feature {index} is not finite")]
    NonFinite { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The model was trained on a different number of columns.
    #[error("Model expects {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The input vector holds NaN or infinity.
    #[error("Input contains a non-finite value at feature {index}")]
    NonFiniteInput { index: usize },

    /// A tree split refers to a feature the vector does not have.
    #[error("Tree split uses feature {feature} but the input has {len} features")]
    FeatureOutOfRange { feature: usize, len: usize },

    /// A decision tree is structurally broken.
    #[error("Malformed decision tree: {0}")]
    MalformedTree(String),

    /// A forest with no trees cannot vote.
    #[error("Random forest has no trees")]
    EmptyEnsemble,

    /// The estimator returned NaN or infinity.
    #[error("Model produced a non-finite probability")]
    NonFiniteProbability,
}
