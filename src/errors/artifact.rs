// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading the model artifact.
//!
//! Every variant is fatal: a dashboard without a model has nothing to show.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The artifact file is missing or unreadable.
    #[error("Failed to read model artifact '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not a valid JSON model bundle.
    #[error("Corrupt model artifact: {0}")]
    Json(#[from] serde_json::Error),

    /// The bundle carries no feature columns.
    #[error("Model artifact lists no feature columns")]
    NoColumns,

    /// The same column name appears twice, so one-hot slots would be ambiguous.
    #[error("Model artifact lists column '{0}' more than once")]
    DuplicateColumn(String),
}
