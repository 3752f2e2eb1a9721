// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Activity editor form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::validation::{check, validate_slug, FieldError, ValidationReport};
use crate::models::activity::ActivityKind;
use crate::models::content::{ContentStatus, Difficulty, Locale};
use crate::models::payload::{ContentBody, ContentPayload, CounterType, ExerciseBody, ExerciseStep};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ActivityForm {
    #[validate(length(min = 3, message = "El título es muy corto"))]
    pub title: String,
    #[validate(length(min = 3), custom(function = "validate_slug"))]
    pub slug: String,
    /// Type plus the fields that type requires
    #[serde(flatten)]
    pub kind: ActivityKind,
    #[validate(range(min = 1))]
    pub duration_minutes: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub status: ContentStatus,
    #[validate(length(min = 10, message = "La introducción debe ser descriptiva"))]
    pub intro_text: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            kind: ActivityKind::default(),
            duration_minutes: 5,
            difficulty: Difficulty::Basic,
            locale: Locale::EsLatam,
            status: ContentStatus::Draft,
            intro_text: String::new(),
            cover_image: None,
            bullets: Vec::new(),
        }
    }
}

impl ActivityForm {
    /// Field rules plus the rules of the selected type.
    pub fn validate_form(&self) -> Result<(), ValidationReport> {
        let mut report = match check(self) {
            Ok(()) => ValidationReport::new(),
            Err(report) => report,
        };

        match &self.kind {
            ActivityKind::BreathingTimer { timer_config } => {
                report.check_at("timer_config", timer_config);
            }
            ActivityKind::Reflection {
                reflection_questions,
            } => {
                if reflection_questions.is_empty() {
                    report.push(FieldError::new(
                        "reflection_questions",
                        "length",
                        "Agrega al menos una pregunta",
                    ));
                }
                for (index, question) in reflection_questions.iter().enumerate() {
                    if question.trim().is_empty() {
                        report.push(FieldError::new(
                            format!("reflection_questions[{index}]"),
                            "non_empty",
                            "La pregunta no puede estar vacía",
                        ));
                    }
                }
            }
            ActivityKind::Grounding
            | ActivityKind::Checklist
            | ActivityKind::Psychoeducation
            | ActivityKind::HabitPlanner => {}
        }

        report.into_result()
    }

    /// Steps of the exercise body derived from the selected type.
    fn exercise_steps(&self) -> Vec<ExerciseStep> {
        match &self.kind {
            ActivityKind::BreathingTimer { timer_config } => {
                let phases = [
                    ("Inhala", Some(timer_config.inhale), CounterType::Inhale),
                    ("Sostén", timer_config.hold_in, CounterType::Hold),
                    ("Exhala", Some(timer_config.exhale), CounterType::Exhale),
                ];
                phases
                    .into_iter()
                    .filter_map(|(title, secs, counter)| {
                        secs.filter(|s| *s > 0).map(|s| (title, s, counter))
                    })
                    .enumerate()
                    .map(|(i, (title, secs, counter))| ExerciseStep {
                        step: i as u32 + 1,
                        title: title.to_string(),
                        instruction: format!("{title} durante {secs} segundos"),
                        duration: format!("{secs}s"),
                        image_url: None,
                        has_timer: Some(true),
                        counter_type: Some(counter),
                        repeat_cycles: Some(timer_config.cycles),
                    })
                    .collect()
            }
            ActivityKind::Reflection {
                reflection_questions,
            } => text_steps(reflection_questions),
            _ => text_steps(&self.bullets),
        }
    }

    /// `POST /content` payload: activities are stored as `exercise` content.
    pub fn to_exercise_payload(&self) -> ContentPayload {
        let body = ExerciseBody {
            introduction: self.intro_text.clone(),
            difficulty: self.difficulty.into(),
            duration: format!("{} min", self.duration_minutes),
            audio_url: None,
            video_url: None,
            thumbnail_url: self.cover_image.clone(),
            steps: self.exercise_steps(),
            tips: Vec::new(),
            contraindications: Vec::new(),
            expected_results: String::new(),
        };
        let mut payload = ContentPayload::new(self.title.clone(), ContentBody::Exercise(body));
        payload.locale = Some(self.locale);
        payload.is_published = Some(self.status == ContentStatus::Published);
        payload
    }
}

fn text_steps(lines: &[String]) -> Vec<ExerciseStep> {
    lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .enumerate()
        .map(|(i, line)| ExerciseStep {
            step: i as u32 + 1,
            title: format!("Paso {}", i + 1),
            instruction: line.clone(),
            duration: String::new(),
            image_url: None,
            has_timer: None,
            counter_type: None,
            repeat_cycles: None,
        })
        .collect()
}
