// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use super::ModelArtifact;
use crate::errors::ArtifactError;
use crate::observability::messages::artifact::{ArtifactLoadFailed, ArtifactLoaded};
use crate::observability::messages::StructuredLog;
use crate::traits::Classifier;

static ARTIFACT: OnceLock<ModelArtifact> = OnceLock::new();

/// Parse a model artifact from its JSON text and check its column list.
pub fn parse_artifact(content: &str) -> Result<ModelArtifact, ArtifactError> {
    let artifact: ModelArtifact = serde_json::from_str(content)?;

    if artifact.columns.is_empty() {
        return Err(ArtifactError::NoColumns);
    }

    let mut seen = HashSet::with_capacity(artifact.columns.len());
    for column in &artifact.columns {
        if !seen.insert(column.as_str()) {
            return Err(ArtifactError::DuplicateColumn(column.clone()));
        }
    }

    Ok(artifact)
}

/// Load a model artifact from a JSON file.
pub fn load_artifact<P: AsRef<Path>>(path: P) -> Result<ModelArtifact, ArtifactError> {
    let path = path.as_ref();
    let start = Instant::now();

    let result = fs::read_to_string(path)
        .map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|content| parse_artifact(&content));

    match &result {
        Ok(artifact) => ArtifactLoaded {
            path,
            model: artifact.model.name(),
            column_count: artifact.columns.len(),
            duration: start.elapsed(),
        }
        .log(),
        Err(error) => ArtifactLoadFailed { path, error }.log(),
    }

    result
}

/// Load the artifact once per process and hand out the shared copy afterwards.
///
/// The first successful load wins; later calls return it regardless of `path`.
/// A failed load caches nothing, so the caller decides whether to stop.
pub fn cached_artifact<P: AsRef<Path>>(path: P) -> Result<&'static ModelArtifact, ArtifactError> {
    if let Some(artifact) = ARTIFACT.get() {
        return Ok(artifact);
    }
    let artifact = load_artifact(path)?;
    Ok(ARTIFACT.get_or_init(|| artifact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL_ARTIFACT: &str = r#"{
        "model": {"kind": "linear_svc", "coef": [1.0, -1.0], "intercept": 0.0},
        "scaler": {"kind": "identity"},
        "columns": ["tenure", "gender_Female"]
    }"#;

    #[test]
    fn test_load_artifact_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SMALL_ARTIFACT.as_bytes()).unwrap();

        let artifact = load_artifact(file.path()).unwrap();
        assert_eq!(artifact.columns, vec!["tenure", "gender_Female"]);
        assert_eq!(artifact.model.name(), "linear_svc");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_artifact(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\x80\x04\x95 not json").unwrap();
        // Non-UTF-8 bytes fail at read time, plain garbage fails at parse time.
        assert!(load_artifact(file.path()).is_err());

        let err = parse_artifact("{\"model\": 3}").unwrap_err();
        assert!(matches!(err, ArtifactError::Json(_)));
    }

    #[test]
    fn test_empty_columns_rejected() {
        let json = r#"{"model": {"kind": "linear_svc", "coef": [], "intercept": 0.0},
                       "scaler": {"kind": "identity"}, "columns": []}"#;
        assert!(matches!(parse_artifact(json), Err(ArtifactError::NoColumns)));
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let json = r#"{"model": {"kind": "linear_svc", "coef": [1.0, 1.0], "intercept": 0.0},
                       "scaler": {"kind": "identity"}, "columns": ["tenure", "tenure"]}"#;
        match parse_artifact(json) {
            Err(ArtifactError::DuplicateColumn(column)) => assert_eq!(column, "tenure"),
            other => panic!("expected DuplicateColumn, got {:?}", other),
        }
    }
}
