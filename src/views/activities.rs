// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Activity list.

use std::fmt;

use crate::models::activity::Activity;
use crate::navigation::ACTIVITIES_PATH;
use crate::views::{title_matches, StatusBadge};

pub const EMPTY_ACTIVITIES_MESSAGE: &str = "No se encontraron actividades.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub title: String,
    pub slug: String,
    pub type_label: String,
    pub duration: String,
    pub badge: StatusBadge,
    pub edit_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityListView {
    pub rows: Vec<ActivityRow>,
}

/// `breathing_timer` → `breathing timer`
pub fn type_label(type_name: &str) -> String {
    type_name.replace('_', " ")
}

impl ActivityListView {
    pub fn new(activities: &[Activity], search: &str) -> Self {
        let rows = activities
            .iter()
            .filter(|a| title_matches(&a.title, search))
            .map(|a| ActivityRow {
                title: a.title.clone(),
                slug: a.slug.clone(),
                type_label: type_label(a.kind.type_name()),
                duration: format!("{} min", a.duration_minutes),
                badge: StatusBadge::new(a.status),
                edit_path: format!("{ACTIVITIES_PATH}/{}", a.id),
            })
            .collect();
        Self { rows }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(EMPTY_ACTIVITIES_MESSAGE)
    }
}

impl fmt::Display for ActivityListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.empty_message() {
            return writeln!(f, "{message}");
        }
        for row in &self.rows {
            writeln!(
                f,
                "{:<28} {:<16} {:>7}  {}",
                row.title, row.type_label, row.duration, row.badge.label
            )?;
        }
        Ok(())
    }
}
