// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! What the user sees after each submission.
//!
//! A [`Report`] captures one prediction outcome together with the model's
//! feature chart. It renders either as the three-section terminal dashboard
//! or as JSON for scripting.

mod interactive;
mod report;
mod text;

pub use interactive::run_interactive;
pub use report::{Dashboard, Outcome, Report};
pub use text::{render_text, FEATURE_DICTIONARY};

use crate::config::OutputFormat;

/// Render `report` in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}
