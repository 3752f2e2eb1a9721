// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Wire payloads for `POST /content`, `PATCH /content/{id}` and content
//! detail responses.
//!
//! Create requests and detail responses are a discriminated union on
//! `type` with a type-specific `body`:
//!
//! ```json
//! { "type": "route", "title": "...", "body": { ... }, "sources": ["..."] }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::content::{BodyDifficulty, ContentStatus, Difficulty, Locale};
use crate::models::route::{DurationDays, RouteDay, RouteStep};

/// Type tag plus body of a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "lowercase")]
pub enum ContentBody {
    Route(RouteBody),
    Exercise(ExerciseBody),
    Article(ArticleBody),
}

impl ContentBody {
    pub fn type_name(&self) -> &'static str {
        match self {
            ContentBody::Route(_) => "route",
            ContentBody::Exercise(_) => "exercise",
            ContentBody::Article(_) => "article",
        }
    }
}

/// Route bodies come in two shapes that are never converted into each
/// other: the builder's day/block program and the create form's flat steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteBody {
    Program(RouteProgramBody),
    Steps(RouteStepsBody),
}

/// Day/block program produced by the route builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RouteProgramBody {
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub goal: String,
    pub duration_days: DurationDays,
    pub estimated_daily_minutes: u32,
    pub level: Difficulty,
    pub status: ContentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_notes: Option<String>,
    #[validate(length(min = 1, message = "La ruta necesita al menos un día"), nested)]
    pub days: Vec<RouteDay>,
}

/// Flat step list produced by the route-create form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStepsBody {
    pub version: String,
    pub intro: String,
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterType {
    Inhale,
    Hold,
    Exhale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStep {
    pub step: u32,
    pub title: String,
    pub instruction: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_timer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_type: Option<CounterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_cycles: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseBody {
    pub introduction: String,
    pub difficulty: BodyDifficulty,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub steps: Vec<ExerciseStep>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
    #[serde(default)]
    pub expected_results: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Text,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSection {
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleBody {
    pub cover_image: String,
    pub author: String,
    pub reading_time: String,
    pub publish_date: String,
    pub sections: Vec<ArticleSection>,
    #[serde(default)]
    pub related_exercises: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body of `POST /content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPayload {
    #[serde(flatten)]
    pub content: ContentBody,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

impl ContentPayload {
    /// Payload with only the required fields set.
    pub fn new(title: impl Into<String>, content: ContentBody) -> Self {
        Self {
            content,
            title: title.into(),
            description: None,
            topic: None,
            locale: None,
            is_premium: None,
            is_published: None,
            version: None,
            disclaimer_id: None,
            sources: None,
        }
    }
}

/// Response of `GET /content/routes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetail {
    pub id: String,
    #[serde(flatten)]
    pub content: ContentBody,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub is_premium: Option<bool>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub disclaimer_id: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Minimal acknowledgement of a create/update. Servers may answer with an
/// empty body, in which case `id` stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentRef {
    #[serde(default)]
    pub id: Option<String>,
}

// ─── Partial updates ─────────────────────────────────────────

/// Body of `PATCH /content/{id}`; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

impl UpdateContentPayload {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial of one of the body shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BodyPatch {
    RouteProgram(RouteProgramPatch),
    RouteSteps(RouteStepsPatch),
    Exercise(ExercisePatch),
    Article(ArticlePatch),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteProgramPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<DurationDays>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_daily_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<RouteDay>>,
}

impl From<RouteProgramBody> for RouteProgramPatch {
    fn from(body: RouteProgramBody) -> Self {
        Self {
            slug: Some(body.slug),
            summary: Some(body.summary),
            goal: Some(body.goal),
            duration_days: Some(body.duration_days),
            estimated_daily_minutes: Some(body.estimated_daily_minutes),
            level: Some(body.level),
            status: Some(body.status),
            cover_image: body.cover_image,
            days: Some(body.days),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteStepsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<RouteStep>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<BodyDifficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<ExerciseStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contraindications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_results: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<ArticleSection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::route::StepType;

    fn steps_payload() -> ContentPayload {
        let mut payload = ContentPayload::new(
            "Camino hacia la Confianza",
            ContentBody::Route(RouteBody::Steps(RouteStepsBody {
                version: "1.0".into(),
                intro: "Una ruta para reconocer tus fortalezas.".into(),
                steps: vec![RouteStep {
                    title: "Reconociendo tus Fortalezas".into(),
                    ..RouteStep::blank(1)
                }],
            })),
        );
        payload.topic = Some("ansiedad".into());
        payload.sources = Some(vec!["https://example.org".into()]);
        payload
    }

    #[test]
    fn create_payload_is_tagged_with_type_and_body() {
        let json = serde_json::to_value(steps_payload()).unwrap();
        assert_eq!(json["type"], "route");
        assert_eq!(json["title"], "Camino hacia la Confianza");
        assert_eq!(json["body"]["steps"].as_array().unwrap().len(), 1);
        assert_eq!(json["body"]["steps"][0]["type"], "reflection_exercise");
        assert!(json.get("isPremium").is_none());
    }

    #[test]
    fn detail_keeps_step_body_distinct_from_program() {
        let mut json = serde_json::to_value(steps_payload()).unwrap();
        json["id"] = "r-1".into();
        let detail: ContentDetail = serde_json::from_value(json).unwrap();
        match detail.content {
            ContentBody::Route(RouteBody::Steps(body)) => {
                assert_eq!(body.steps[0].step_type, StepType::ReflectionExercise)
            }
            other => panic!("expected a step body, got {other:?}"),
        }
    }

    #[test]
    fn patch_skips_unset_fields() {
        let patch = UpdateContentPayload {
            title: Some("Nuevo título".into()),
            body: Some(BodyPatch::RouteSteps(RouteStepsPatch {
                intro: Some("Intro revisada".into()),
                ..Default::default()
            })),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Nuevo título", "body": { "intro": "Intro revisada" } })
        );
        assert!(UpdateContentPayload::default().is_empty());
    }
}
