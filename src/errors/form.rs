// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while collecting a customer record.
#[derive(Error, Debug)]
pub enum FormError {
    /// A categorical answer outside the field's choices.
    #[error("'{value}' is not a valid choice for {field} (choose one of: {})", .allowed.join(", "))]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A numeric answer outside the field's range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A charge that is negative or not a finite number.
    #[error("{field} must be a non-negative amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    /// A numeric answer that does not parse.
    #[error("{field} expects a number, got '{input}'")]
    NotANumber { field: &'static str, input: String },

    /// The record file could not be read.
    #[error("Failed to read record '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record file is not valid YAML/JSON for a customer record.
    #[error("Invalid customer record: {0}")]
    Parse(String),

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Terminal(#[source] std::io::Error),
}
