// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Route forms: the metadata panel next to the builder, and the
//! route-create form with its flat step list.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::builder::RouteBuilder;
use crate::error::AppError;
use crate::forms::validation::{
    validate_non_empty_entries, validate_slug, ValidationReport,
};
use crate::models::content::{ContentStatus, Difficulty, Locale, Paywall};
use crate::models::payload::{
    BodyPatch, ContentBody, ContentDetail, ContentPayload, RouteBody, RouteProgramBody,
    RouteStepsBody, UpdateContentPayload,
};
use crate::models::route::{DurationDays, RouteDay, RouteStep};

/// Editors can move content through draft, review and published only.
fn validate_editable_status(status: &ContentStatus) -> Result<(), ValidationError> {
    if *status == ContentStatus::Archived {
        let mut err = ValidationError::new("status");
        err.message = Some("No se puede archivar desde el editor".into());
        return Err(err);
    }
    Ok(())
}

fn default_version() -> u32 {
    1
}

/// Metadata panel of the route builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RouteMetadataForm {
    #[validate(length(min = 5, message = "Título requerido"))]
    pub title: String,
    #[validate(length(min = 3), custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1, message = "Selecciona un tema"))]
    pub topic: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub level: Difficulty,
    #[serde(default)]
    pub paywall: Paywall,
    #[validate(custom(function = "validate_editable_status"))]
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub duration_days: DurationDays,
    #[validate(range(min = 1))]
    #[serde(default = "default_daily_minutes")]
    pub estimated_daily_minutes: u32,
    #[validate(url(message = "URL inválida"))]
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub disclaimer_id: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_daily_minutes() -> u32 {
    10
}

impl Default for RouteMetadataForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            topic: String::new(),
            locale: Locale::EsLatam,
            level: Difficulty::Basic,
            paywall: Paywall::Free,
            status: ContentStatus::Draft,
            summary: None,
            goal: String::new(),
            duration_days: DurationDays::Seven,
            estimated_daily_minutes: default_daily_minutes(),
            cover_image: None,
            disclaimer_id: None,
            version: default_version(),
        }
    }
}

impl RouteMetadataForm {
    /// Body holding the builder's days under this metadata.
    pub fn program_body(&self, builder: &RouteBuilder) -> RouteProgramBody {
        RouteProgramBody {
            slug: self.slug.clone(),
            summary: self.summary.clone().unwrap_or_default(),
            goal: self.goal.clone(),
            duration_days: self.duration_days,
            estimated_daily_minutes: self.estimated_daily_minutes,
            level: self.level,
            status: self.status,
            cover_image: self.cover_image.clone(),
            prerequisites: Vec::new(),
            safety_notes: None,
            days: builder.to_days(),
        }
    }

    /// Validate the metadata and every day/block of the builder together.
    /// Day errors come back as `days[i]...` so the builder can focus them.
    pub fn validate_with(&self, builder: &RouteBuilder) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::new();
        report.check_at("", self);
        report.check_at("", &self.program_body(builder));
        report.into_result()
    }

    /// `POST /content` payload for the day/block program.
    pub fn to_payload(&self, builder: &RouteBuilder) -> ContentPayload {
        let mut payload = ContentPayload::new(
            self.title.clone(),
            ContentBody::Route(RouteBody::Program(self.program_body(builder))),
        );
        payload.description = self.summary.clone().filter(|s| !s.trim().is_empty());
        payload.topic = Some(self.topic.clone());
        payload.locale = Some(self.locale);
        payload.is_premium = Some(self.paywall == Paywall::Pro);
        payload.is_published = Some(self.status == ContentStatus::Published);
        payload.version = Some(self.version);
        payload.disclaimer_id = self.disclaimer_id.clone();
        payload
    }

    /// `PATCH /content/{id}` payload carrying every editable field.
    pub fn to_update(&self, builder: &RouteBuilder) -> UpdateContentPayload {
        UpdateContentPayload {
            title: Some(self.title.clone()),
            description: self.summary.clone().filter(|s| !s.trim().is_empty()),
            topic: Some(self.topic.clone()),
            locale: Some(self.locale),
            is_premium: Some(self.paywall == Paywall::Pro),
            is_published: Some(self.status == ContentStatus::Published),
            version: Some(self.version),
            disclaimer_id: self.disclaimer_id.clone(),
            body: Some(BodyPatch::RouteProgram(self.program_body(builder).into())),
            ..UpdateContentPayload::default()
        }
    }

    /// Split a stored route into the metadata panel and a builder.
    ///
    /// Only day/block programs can be edited here; a route stored with the
    /// flat step list is rejected.
    pub fn from_detail(detail: &ContentDetail) -> Result<(Self, RouteBuilder), AppError> {
        let program = match &detail.content {
            ContentBody::Route(RouteBody::Program(program)) => program,
            ContentBody::Route(RouteBody::Steps(_)) => {
                return Err(AppError::InvalidInput(
                    "La ruta usa el formato de pasos y no puede abrirse en el constructor"
                        .to_string(),
                ))
            }
            other => {
                return Err(AppError::InvalidInput(format!(
                    "El contenido {} es de tipo {}, no una ruta",
                    detail.id,
                    other.type_name()
                )))
            }
        };

        let form = Self {
            title: detail.title.clone(),
            slug: program.slug.clone(),
            topic: detail.topic.clone().unwrap_or_default(),
            locale: detail.locale.unwrap_or_default(),
            level: program.level,
            paywall: if detail.is_premium.unwrap_or(false) {
                Paywall::Pro
            } else {
                Paywall::Free
            },
            status: program.status,
            summary: Some(program.summary.clone()).filter(|s| !s.is_empty()),
            goal: program.goal.clone(),
            duration_days: program.duration_days,
            estimated_daily_minutes: program.estimated_daily_minutes,
            cover_image: program.cover_image.clone(),
            disclaimer_id: detail.disclaimer_id.clone(),
            version: detail.version.unwrap_or_else(default_version),
        };
        Ok((form, RouteBuilder::from_days(program.days.clone())))
    }
}

/// Metadata plus days, as exchanged with draft files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDraft {
    #[serde(flatten)]
    pub metadata: RouteMetadataForm,
    #[serde(default)]
    pub days: Vec<RouteDay>,
}

impl RouteDraft {
    pub fn from_parts(metadata: &RouteMetadataForm, builder: &RouteBuilder) -> Self {
        Self {
            metadata: metadata.clone(),
            days: builder.to_days(),
        }
    }

    pub fn into_parts(self) -> (RouteMetadataForm, RouteBuilder) {
        (self.metadata, RouteBuilder::from_days(self.days))
    }
}

fn default_step_version() -> String {
    "1.0".to_string()
}

/// Route-create form with the flat step list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RouteCreateForm {
    #[validate(length(min = 5, message = "El título debe tener al menos 5 caracteres"))]
    pub title: String,
    #[validate(length(min = 1, message = "Selecciona un tema"))]
    pub topic: String,
    #[validate(length(min = 10, message = "La introducción debe tener al menos 10 caracteres"))]
    pub intro: String,
    #[serde(default = "default_step_version")]
    pub version: String,
    #[validate(
        length(min = 1, message = "Agrega al menos una fuente"),
        custom(function = "validate_non_empty_entries")
    )]
    pub sources: Vec<String>,
    #[validate(length(min = 1, message = "Agrega al menos un paso"), nested)]
    pub steps: Vec<RouteStep>,
}

impl Default for RouteCreateForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            topic: String::new(),
            intro: String::new(),
            version: default_step_version(),
            sources: vec![String::new()],
            steps: vec![RouteStep::blank(1)],
        }
    }
}

impl RouteCreateForm {
    pub fn add_source(&mut self) {
        self.sources.push(String::new());
    }

    /// The last source row cannot be removed.
    pub fn remove_source(&mut self, index: usize) -> bool {
        if self.sources.len() <= 1 || index >= self.sources.len() {
            return false;
        }
        self.sources.remove(index);
        true
    }

    /// Append a blank step numbered after the current count.
    pub fn add_step(&mut self) -> usize {
        let day = self.steps.len() as u32 + 1;
        self.steps.push(RouteStep::blank(day));
        self.steps.len() - 1
    }

    /// The last step cannot be removed.
    pub fn remove_step(&mut self, index: usize) -> bool {
        if self.steps.len() <= 1 || index >= self.steps.len() {
            return false;
        }
        self.steps.remove(index);
        true
    }

    /// `POST /content` payload. Blank source rows are dropped.
    pub fn to_payload(&self) -> ContentPayload {
        let mut payload = ContentPayload::new(
            self.title.clone(),
            ContentBody::Route(RouteBody::Steps(RouteStepsBody {
                version: self.version.clone(),
                intro: self.intro.clone(),
                steps: self.steps.clone(),
            })),
        );
        payload.topic = Some(self.topic.clone());
        payload.sources = Some(
            self.sources
                .iter()
                .filter(|s| !s.trim().is_empty())
                .cloned()
                .collect(),
        );
        payload
    }
}
