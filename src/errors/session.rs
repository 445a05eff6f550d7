// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::FormError;

/// Errors that end an interactive dashboard session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
