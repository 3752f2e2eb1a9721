// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! List views: filtered rows, status badges and empty states.

pub mod activities;
pub mod routes;

use crate::models::content::ContentStatus;

pub use activities::ActivityListView;
pub use routes::RouteListView;

/// Badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Gray,
    Yellow,
    Green,
    Purple,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

impl StatusBadge {
    pub fn new(status: ContentStatus) -> Self {
        let (label, tone) = match status {
            ContentStatus::Draft => ("Borrador", Tone::Gray),
            ContentStatus::Review => ("En Revisión", Tone::Yellow),
            ContentStatus::Published => ("Publicado", Tone::Green),
            ContentStatus::Archived => ("Archivado", Tone::Purple),
        };
        Self {
            label: label.to_string(),
            tone,
        }
    }

    /// Badge for a status string that may be outside the known set. Unknown
    /// values keep their raw text with the draft tone.
    pub fn from_raw(raw: &str) -> Self {
        match serde_json::from_value::<ContentStatus>(serde_json::Value::String(raw.to_string())) {
            Ok(status) => Self::new(status),
            Err(_) => Self {
                label: raw.to_string(),
                tone: Tone::Gray,
            },
        }
    }
}

/// Case-insensitive substring match used by the list search boxes.
pub fn title_matches(title: &str, search: &str) -> bool {
    title.to_lowercase().contains(&search.trim().to_lowercase())
}
