// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for resolving form fields against the model's columns.

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// Encoding plan resolved for an artifact's column list.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use churn_dashboard::observability::messages::encoding::EncodingPlanResolved;
///
/// let msg = EncodingPlanResolved {
///     column_count: 45,
///     numeric_mapped: 4,
///     choices_mapped: 41,
///     choices_unmapped: 0,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Encoding plan resolved over 45 columns: 4 numeric fields mapped, 41 choices mapped, 0 unmapped"
/// );
/// ```
pub struct EncodingPlanResolved {
    pub column_count: usize,
    pub numeric_mapped: usize,
    pub choices_mapped: usize,
    pub choices_unmapped: usize,
}

impl Display for EncodingPlanResolved {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Encoding plan resolved over {} columns: {} numeric fields mapped, {} choices mapped, {} unmapped",
            self.column_count, self.numeric_mapped, self.choices_mapped, self.choices_unmapped
        )
    }
}

impl StructuredLog for EncodingPlanResolved {
    fn log(&self) {
        tracing::info!(
            column_count = self.column_count,
            numeric_mapped = self.numeric_mapped,
            choices_mapped = self.choices_mapped,
            choices_unmapped = self.choices_unmapped,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "encoding_plan",
            span_name = name,
            column_count = self.column_count,
        )
    }
}

/// A form choice with no matching one-hot column. Selecting it leaves the
/// whole group at zero.
///
/// # Log Level
/// `debug!` - Expected for reference categories dropped at training time
pub struct UnmappedChoice<'a> {
    pub field: &'a str,
    pub prefix: &'a str,
    pub value: &'a str,
}

impl Display for UnmappedChoice<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No column for {} = '{}' (tried '{}_{}' and '{}{}')",
            self.field, self.value, self.prefix, self.value, self.prefix, self.value
        )
    }
}

impl StructuredLog for UnmappedChoice<'_> {
    fn log(&self) {
        tracing::debug!(
            field = self.field,
            prefix = self.prefix,
            value = self.value,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "unmapped_choice",
            span_name = name,
            field = self.field,
            value = self.value,
        )
    }
}
