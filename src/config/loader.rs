// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_RISK_THRESHOLD, DEFAULT_TOP_FEATURES, MAX_TOP_FEATURES, MIN_TOP_FEATURES,
};
use crate::errors::ConfigError;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure for the churn dashboard.
///
/// Names the model artifact and tunes how results are displayed. It is
/// typically loaded from a YAML file; a `.toml` extension switches to TOML.
///
/// # Fields
/// * `artifact` - Path to the JSON model artifact, relative to the config file
/// * `display` - Presentation options (optional, all fields default)
///
/// # Example
/// ```yaml
/// artifact: ../models/single_best_model.json
/// display:
///   risk_threshold: 0.5
///   top_features: 10
///   format: text
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub artifact: PathBuf,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Config {
    /// The artifact location, resolved against the directory of the config file.
    pub fn artifact_path(&self) -> PathBuf {
        match &self.base_dir {
            Some(dir) if self.artifact.is_relative() => dir.join(&self.artifact),
            _ => self.artifact.clone(),
        }
    }

    /// Replace the artifact with one given on the command line, relative to
    /// the working directory rather than the config file.
    pub fn override_artifact<P: Into<PathBuf>>(&mut self, artifact: P) {
        self.artifact = artifact.into();
        self.base_dir = None;
    }
}

/// Presentation options.
///
/// # Fields
/// * `risk_threshold` - Probability above which the risk caption reads high (defaults to 0.5)
/// * `top_features` - Bars in the importance chart (defaults to 10, clamped to 1..=50)
/// * `format` - `text` for the terminal dashboard, `json` for scripting
#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    pub risk_threshold: Option<f64>,
    pub top_features: Option<usize>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl DisplayConfig {
    /// Get the risk threshold, using the built-in default if not configured.
    pub fn get_risk_threshold(&self) -> f64 {
        self.risk_threshold.unwrap_or(DEFAULT_RISK_THRESHOLD)
    }

    /// Get the chart size, clamped to the allowed bounds.
    ///
    /// # Example
    /// ```
    /// use churn_dashboard::config::DisplayConfig;
    ///
    /// let display = DisplayConfig { top_features: Some(500), ..Default::default() };
    /// assert_eq!(display.get_top_features(), 50);
    /// ```
    pub fn get_top_features(&self) -> usize {
        self.top_features
            .unwrap_or(DEFAULT_TOP_FEATURES)
            .clamp(MIN_TOP_FEATURES, MAX_TOP_FEATURES)
    }
}

/// How a dashboard report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut cfg: Config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    cfg.base_dir = path.parent().map(Path::to_path_buf);
    Ok(cfg)
}

/// Load and validate a config file
///
/// A risk threshold outside `0.0..=1.0` is rejected rather than clamped since
/// it changes what the dashboard tells the user.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    load_with_artifact_override(path, None)
}

/// Load and validate a config file, replacing its artifact when `artifact` is given.
///
/// The override is applied before `ConfigLoaded` is logged.
pub fn load_with_artifact_override<P: AsRef<Path>>(
    path: P,
    artifact: Option<&Path>,
) -> Result<Config, ConfigError> {
    let mut cfg = load_config(&path)?;
    if let Some(artifact) = artifact {
        cfg.override_artifact(artifact);
    }

    if let Some(threshold) = cfg.display.risk_threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::RiskThresholdOutOfRange(threshold));
        }
    }

    ConfigLoaded {
        path: path.as_ref(),
        artifact: &cfg.artifact_path(),
        risk_threshold: cfg.display.get_risk_threshold(),
        top_features: cfg.display.get_top_features(),
    }
    .log();

    Ok(cfg)
}
