// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Route (multi-day program) models.
//!
//! Two nested shapes exist on the wire: the day/block program edited by the
//! builder, and the flat step list produced by the route-create form. They
//! are separate types on purpose; nothing converts one into the other.

use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Advertised program length. Only 7, 14 and 21 days are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DurationDays {
    #[default]
    Seven,
    Fourteen,
    TwentyOne,
}

impl DurationDays {
    pub fn days(&self) -> u8 {
        match self {
            DurationDays::Seven => 7,
            DurationDays::Fourteen => 14,
            DurationDays::TwentyOne => 21,
        }
    }
}

impl TryFrom<u8> for DurationDays {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(DurationDays::Seven),
            14 => Ok(DurationDays::Fourteen),
            21 => Ok(DurationDays::TwentyOne),
            other => Err(format!("duration_days must be 7, 14 or 21 (got {other})")),
        }
    }
}

impl From<DurationDays> for u8 {
    fn from(value: DurationDays) -> Self {
        value.days()
    }
}

/// Kind of content unit inside a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Lesson,
    Activity,
    Reflection,
    Checklist,
}

impl BlockType {
    pub const ALL: [BlockType; 4] = [
        BlockType::Lesson,
        BlockType::Activity,
        BlockType::Reflection,
        BlockType::Checklist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Lesson => "lesson",
            BlockType::Activity => "activity",
            BlockType::Reflection => "reflection",
            BlockType::Checklist => "checklist",
        }
    }

    /// Title given to a freshly inserted block.
    pub fn default_title(&self) -> &'static str {
        match self {
            BlockType::Lesson => "Nueva Lección",
            BlockType::Activity => "Nuevo Ejercicio",
            BlockType::Reflection => "Nueva Reflexión",
            BlockType::Checklist => "Nuevo Checklist",
        }
    }
}

/// Atomic content unit within a day.
///
/// `id` is a client-side identifier used to key drag-and-drop; it is unique
/// within its day and carries no server identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RouteBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[validate(length(min = 1, message = "Título requerido"))]
    pub title: String,
    #[serde(rename = "estimated_minutes")]
    #[validate(range(min = 1, message = "La duración debe ser de al menos 1 minuto"))]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Weak reference to an Activity by id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_ref_id: Option<String>,
    /// Inherited from the route when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer_id: Option<String>,
}

/// One day of a route's schedule as sent to and read from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RouteDay {
    pub day_number: u32,
    #[validate(length(min = 1, message = "El día necesita un título"))]
    pub title: String,
    #[serde(default)]
    pub learning_objective: String,
    #[validate(nested)]
    #[serde(default)]
    pub blocks: Vec<RouteBlock>,
}

/// Row of `GET /content/catalog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RouteListItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub topic: String,
    pub version: u32,
}

// ─── Flat step model (route-create form) ─────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    ReflectionExercise,
    AudioMeditation,
    ArticleAndTask,
    Journaling,
    BreathingExercise,
    VideoLesson,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StepContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_prompt: Option<String>,
    #[validate(custom(function = "crate::forms::validation::validate_url_or_empty"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RouteStep {
    #[validate(range(min = 1))]
    pub day: u32,
    #[validate(length(min = 3, message = "Título requerido"))]
    pub title: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
    #[validate(nested)]
    #[serde(default)]
    pub content: StepContent,
}

impl RouteStep {
    /// Blank step appended by the "+" control.
    pub fn blank(day: u32) -> Self {
        Self {
            day,
            title: String::new(),
            step_type: StepType::ReflectionExercise,
            content: StepContent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_days_only_accepts_offered_lengths() {
        let ok: DurationDays = serde_json::from_str("14").unwrap();
        assert_eq!(ok, DurationDays::Fourteen);
        assert!(serde_json::from_str::<DurationDays>("10").is_err());
        assert_eq!(serde_json::to_value(DurationDays::TwentyOne).unwrap(), 21);
    }

    #[test]
    fn block_uses_wire_field_names() {
        let block = RouteBlock {
            id: "blk-1".into(),
            block_type: BlockType::Reflection,
            title: "Escribe tres logros".into(),
            duration: 10,
            body: None,
            activity_ref_id: None,
            disclaimer_id: None,
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "reflection");
        assert_eq!(json["estimated_minutes"], 10);
        assert!(json.get("body").is_none());
    }
}
