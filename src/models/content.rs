// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Enumerations shared by every content entity.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Editorial lifecycle of a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ContentStatus {
    #[default]
    Draft,
    Review,
    Published,
    Archived,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Review => "review",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
        }
    }
}

/// Access tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Paywall {
    #[default]
    Free,
    Pro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Difficulty {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Difficulty as the content API spells it in `body.difficulty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyDifficulty {
    Principiante,
    Intermedio,
    Avanzado,
}

impl From<Difficulty> for BodyDifficulty {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Basic => BodyDifficulty::Principiante,
            Difficulty::Intermediate => BodyDifficulty::Intermedio,
            Difficulty::Advanced => BodyDifficulty::Avanzado,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Locale {
    #[default]
    #[serde(rename = "es-LATAM")]
    EsLatam,
    #[serde(rename = "pt-BR")]
    PtBr,
}

/// A citation attached to activities and library items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SourceRef {
    #[validate(url(message = "URL inválida"))]
    pub url: String,
    #[validate(length(min = 1, message = "Cita requerida"))]
    pub citation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_uses_api_spelling() {
        assert_eq!(serde_json::to_value(Locale::EsLatam).unwrap(), "es-LATAM");
        let parsed: Locale = serde_json::from_str("\"pt-BR\"").unwrap();
        assert_eq!(parsed, Locale::PtBr);
    }

    #[test]
    fn difficulty_maps_to_body_spelling() {
        let mapped: BodyDifficulty = Difficulty::Intermediate.into();
        assert_eq!(serde_json::to_value(mapped).unwrap(), "intermedio");
    }
}
