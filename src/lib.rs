// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod artifact;      // model artifact loading + cache
pub mod config;        // dashboard config
pub mod dashboard;     // text and json rendering
pub mod encoding;      // record -> feature vector
pub mod errors;        // error handling
pub mod form;          // customer record + interactive form
pub mod observability;
pub mod pipeline;      // scale, predict, rank features
pub mod traits;        // classifier and scaler seams
