// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic line the dashboard emits is a message struct in
//! `messages`, rendered through `Display` and logged through `StructuredLog`
//! so the human-readable text and the structured fields stay together.
//!
//! * `messages::artifact` - model artifact loading
//! * `messages::config` - configuration loading
//! * `messages::encoding` - encoding plan resolution against the model columns
//! * `messages::pipeline` - scaling, prediction and feature importance
//!
//! # Usage
//!
//! ```rust
//! use churn_dashboard::observability::messages::pipeline::PredictionFailed;
//! use churn_dashboard::observability::messages::StructuredLog;
//! use churn_dashboard::errors::PredictionError;
//!
//! let error = PredictionError::EmptyEnsemble;
//! PredictionFailed {
//!     model: "random_forest",
//!     error: &error,
//! }
//! .log();
//! ```

pub mod messages;
