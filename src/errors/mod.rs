// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod artifact;
mod config;
mod form;
mod prediction;
mod session;

pub use artifact::ArtifactError;
pub use config::ConfigError;
pub use form::FormError;
pub use prediction::{PredictionError, ScalingError};
pub use session::SessionError;
