// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod record;
pub mod schema;
pub mod session;

pub use record::CustomerRecord;
pub use schema::{field, FieldKind, FieldSpec, FormSection, FORM_FIELDS};
pub use session::FormSession;
