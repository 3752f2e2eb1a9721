// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Services module - content API access.

pub mod api;
pub mod auth;
pub mod content;

pub use api::ApiClient;
pub use auth::AuthService;
pub use content::{ContentService, MutationGate};
