// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Data models for the content API.

pub mod activity;
pub mod catalog;
pub mod content;
pub mod payload;
pub mod route;
pub mod user;

pub use activity::{Activity, ActivityKind, BreathingConfig};
pub use content::{ContentStatus, Difficulty, Locale, Paywall};
pub use payload::{ContentBody, ContentDetail, ContentPayload, RouteBody, UpdateContentPayload};
pub use route::{BlockType, DurationDays, RouteBlock, RouteDay, RouteListItem};
pub use user::{Role, User};
