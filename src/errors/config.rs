// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the dashboard configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML document is malformed or does not match the schema.
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The TOML document is malformed or does not match the schema.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configured risk threshold is not a probability.
    #[error("Risk threshold {0} is outside 0.0..=1.0")]
    RiskThresholdOutOfRange(f64),

    /// An output format name that is neither `text` nor `json`.
    #[error("Unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),
}
