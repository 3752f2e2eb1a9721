// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Route catalog list.

use std::fmt;

use crate::models::route::RouteListItem;
use crate::navigation::ROUTES_PATH;
use crate::views::title_matches;

pub const EMPTY_ROUTES_MESSAGE: &str = "No se encontraron rutas. Intenta crear una nueva.";
const EMPTY_CATALOG_HEADER: &str = "Gestiona las rutas de aprendizaje.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub version: String,
    pub edit_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteListView {
    /// Catalog size before filtering
    pub total: usize,
    pub rows: Vec<RouteRow>,
}

impl RouteListView {
    pub fn new(catalog: &[RouteListItem], search: &str) -> Self {
        let rows = catalog
            .iter()
            .filter(|item| title_matches(&item.title, search))
            .map(|item| RouteRow {
                id: item.id.clone(),
                title: item.title.clone(),
                description: item.description.clone().unwrap_or_default(),
                topic: if item.topic.is_empty() {
                    "General".to_string()
                } else {
                    item.topic.clone()
                },
                version: format!("v{}", item.version),
                edit_path: format!("{ROUTES_PATH}/{}", item.id),
            })
            .collect();

        Self {
            total: catalog.len(),
            rows,
        }
    }

    pub fn header(&self) -> String {
        if self.total == 0 {
            EMPTY_CATALOG_HEADER.to_string()
        } else {
            format!("Mostrando {} rutas del catálogo.", self.total)
        }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(EMPTY_ROUTES_MESSAGE)
    }
}

impl fmt::Display for RouteListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        if let Some(message) = self.empty_message() {
            return writeln!(f, "{message}");
        }
        for row in &self.rows {
            writeln!(f, "{:<28} {:<14} {:<5} {}", row.title, row.topic, row.version, row.id)?;
            if !row.description.is_empty() {
                writeln!(f, "    {}", row.description)?;
            }
        }
        Ok(())
    }
}
