// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The model artifact: a fitted classifier, its scaler and the column order
//! both were trained on, shipped together as one JSON document.
//!
//! ```json
//! {
//!   "model":   { "kind": "logistic_regression", "coef": [...], "intercept": -1.2 },
//!   "scaler":  { "kind": "standard", "mean": [...], "scale": [...] },
//!   "columns": ["tenure", "MonthlyCharges", "gender_Female", ...]
//! }
//! ```
//!
//! The artifact is treated as opaque beyond this shape: column counts of the
//! model and scaler are only checked when a vector passes through them.

mod loader;
mod model;
mod scaler;
mod tree;

use serde::{Deserialize, Serialize};

pub use loader::{cached_artifact, load_artifact, parse_artifact};
pub use model::ModelSpec;
pub use scaler::ScalerSpec;
pub use tree::{leaf_probability, TreeNode};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelArtifact {
    pub model: ModelSpec,
    pub scaler: ScalerSpec,
    pub columns: Vec<String>,
}
