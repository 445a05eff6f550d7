// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};
use std::path::Path;

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// Dashboard configuration loaded.
///
/// # Log Level
/// `debug!` - Startup detail
pub struct ConfigLoaded<'a> {
    pub path: &'a Path,
    pub artifact: &'a Path,
    pub risk_threshold: f64,
    pub top_features: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Config '{}' loaded: artifact='{}', risk_threshold={}, top_features={}",
            self.path.display(),
            self.artifact.display(),
            self.risk_threshold,
            self.top_features
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = %self.path.display(),
            artifact = %self.artifact.display(),
            risk_threshold = self.risk_threshold,
            top_features = self.top_features,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "config_loaded",
            span_name = name,
            path = %self.path.display(),
        )
    }
}
