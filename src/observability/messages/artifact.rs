// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for model artifact loading.

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// Model artifact loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use churn_dashboard::observability::messages::artifact::ArtifactLoaded;
/// use std::path::Path;
/// use std::time::Duration;
///
/// let msg = ArtifactLoaded {
///     path: Path::new("single_best_model.json"),
///     model: "logistic_regression",
///     column_count: 45,
///     duration: Duration::from_millis(3),
/// };
///
/// assert!(msg.to_string().contains("45 columns"));
/// ```
pub struct ArtifactLoaded<'a> {
    pub path: &'a Path,
    pub model: &'a str,
    pub column_count: usize,
    pub duration: Duration,
}

impl Display for ArtifactLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} model from '{}': {} columns in {:?}",
            self.model,
            self.path.display(),
            self.column_count,
            self.duration
        )
    }
}

impl StructuredLog for ArtifactLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            model = self.model,
            column_count = self.column_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "artifact_loaded",
            span_name = name,
            path = %self.path.display(),
            model = self.model,
            column_count = self.column_count,
        )
    }
}

/// Model artifact could not be loaded. Fatal for the session.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ArtifactLoadFailed<'a> {
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for ArtifactLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Error loading model from '{}': {}",
            self.path.display(),
            self.error
        )
    }
}

impl StructuredLog for ArtifactLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = %self.path.display(),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "artifact_load_failed",
            span_name = name,
            path = %self.path.display(),
        )
    }
}
