// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Activity (exercise) models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::content::{ContentStatus, Difficulty, Paywall, SourceRef};

/// Breathing timing in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BreathingConfig {
    #[validate(range(min = 1, message = "Inhala debe durar al menos 1s"))]
    pub inhale: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_in: Option<u32>,
    #[validate(range(min = 1, message = "Exhala debe durar al menos 1s"))]
    pub exhale: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_out: Option<u32>,
    #[validate(range(min = 1))]
    pub cycles: u32,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            inhale: 4,
            hold_in: Some(4),
            exhale: 4,
            hold_out: None,
            cycles: 4,
        }
    }
}

impl BreathingConfig {
    /// `"4s - 4s - 4s"`: inhale, hold, exhale.
    pub fn timing_label(&self) -> String {
        format!(
            "{}s - {}s - {}s",
            self.inhale,
            self.hold_in.unwrap_or(0),
            self.exhale
        )
    }
}

/// Activity type with the payload each type requires.
///
/// Only `breathing_timer` carries a timer and only `reflection` carries
/// questions; the other types have no type-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityKind {
    BreathingTimer {
        timer_config: BreathingConfig,
    },
    Grounding,
    Checklist,
    Reflection {
        #[serde(default)]
        reflection_questions: Vec<String>,
    },
    Psychoeducation,
    HabitPlanner,
}

impl Default for ActivityKind {
    fn default() -> Self {
        ActivityKind::BreathingTimer {
            timer_config: BreathingConfig::default(),
        }
    }
}

impl ActivityKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ActivityKind::BreathingTimer { .. } => "breathing_timer",
            ActivityKind::Grounding => "grounding",
            ActivityKind::Checklist => "checklist",
            ActivityKind::Reflection { .. } => "reflection",
            ActivityKind::Psychoeducation => "psychoeducation",
            ActivityKind::HabitPlanner => "habit_planner",
        }
    }

    pub fn timer(&self) -> Option<&BreathingConfig> {
        match self {
            ActivityKind::BreathingTimer { timer_config } => Some(timer_config),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityInstructions {
    pub intro_text: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStep {
    pub order: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAssets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// Standalone exercise entity, referenced from blocks by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub topic_ids: Vec<String>,
    #[serde(flatten)]
    pub kind: ActivityKind,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub instructions: ActivityInstructions,
    #[serde(default)]
    pub steps: Vec<ActivityStep>,
    /// "Si te incomoda..."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contraindications_soft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<ActivityAssets>,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    pub paywall: Paywall,
    pub status: ContentStatus,
    pub version: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_tagged_by_type() {
        let json = serde_json::json!({
            "id": "1",
            "slug": "respiracion-cuadrada",
            "title": "Respiración Cuadrada",
            "topic_ids": ["ansiedad"],
            "type": "breathing_timer",
            "timer_config": { "inhale": 4, "hold_in": 4, "exhale": 4, "cycles": 6 },
            "duration_minutes": 5,
            "difficulty": "basic",
            "instructions": { "intro_text": "Respira..." },
            "paywall": "free",
            "status": "published",
            "version": 1
        });
        let activity: Activity = serde_json::from_value(json).unwrap();
        let timer = activity.kind.timer().expect("breathing activity has a timer");
        assert_eq!(timer.cycles, 6);
        assert_eq!(timer.timing_label(), "4s - 4s - 4s");
    }

    #[test]
    fn breathing_without_timer_does_not_parse() {
        let json = serde_json::json!({ "type": "breathing_timer" });
        assert!(serde_json::from_value::<ActivityKind>(json).is_err());

        let json = serde_json::json!({ "type": "grounding" });
        assert_eq!(
            serde_json::from_value::<ActivityKind>(json).unwrap(),
            ActivityKind::Grounding
        );
    }
}
