// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Supporting catalog entities: topics, tags, disclaimers, library items
//! and "help now" resources.
//!
//! These double as their editor schemas; the `validate` attributes are the
//! field rules enforced before a save.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::validation::validate_slug;
use crate::models::content::{ContentStatus, Locale, Paywall, SourceRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Topic {
    pub id: String,
    /// e.g. `ansiedad`, `estres_laboral`
    #[validate(length(min = 2), custom(function = "validate_topic_slug"))]
    pub slug: String,
    #[validate(length(min = 2, message = "Nombre requerido"))]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub active: bool,
}

/// Topic slugs also allow underscores (`estres_laboral`).
fn validate_topic_slug(slug: &str) -> Result<(), validator::ValidationError> {
    validate_slug(&slug.replace('_', "-"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Trabajo,
    Familia,
    Rumiacion,
    RutinaNoche,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Tag {
    pub id: String,
    #[validate(length(min = 2))]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TagKind,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisclaimerScope {
    Global,
    Cuestionarios,
    Rutas,
    Ejercicios,
    Ayuda,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Disclaimer {
    pub id: String,
    #[validate(length(min = 3, message = "El título es muy corto"))]
    pub title: String,
    /// Limited rich text (HTML or JSON string)
    #[validate(length(min = 10, message = "El texto legal es muy corto"))]
    pub body: String,
    pub scope: DisclaimerScope,
    #[validate(range(min = 1))]
    pub version: u32,
    pub status: ContentStatus,
    pub effective_date: NaiveDate,
    /// When true the app blocks usage until accepted
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryContentType {
    Article,
    Guide,
    Checklist,
    Faq,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LibraryItem {
    pub id: String,
    #[validate(length(min = 3), custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 3, message = "El título es muy corto"))]
    pub title: String,
    #[serde(default)]
    pub topic_ids: Vec<String>,
    #[validate(range(min = 1))]
    pub reading_time_minutes: u32,
    pub content_type: LibraryContentType,
    pub body: String,
    #[validate(nested)]
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer_id: Option<String>,
    pub paywall: Paywall,
    pub status: ContentStatus,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_meta: Option<SeoMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmergencyNumber {
    /// "Policía", "Ambulancia"
    #[validate(length(min = 1))]
    pub label: String,
    #[validate(length(min = 2))]
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OfficialLine {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 2))]
    pub phone: String,
    /// Free text: "24/7", "L-V 9-5"
    pub hours: String,
    #[validate(url)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HelpResource {
    pub id: String,
    /// ISO 3166 alpha-2: `MX`, `CO`, `AR`
    #[validate(length(equal = 2, message = "Código de país de 2 letras"))]
    pub country_code: String,
    pub locale: Locale,
    #[validate(length(min = 1, message = "Agrega al menos un número de emergencia"), nested)]
    pub emergency_numbers: Vec<EmergencyNumber>,
    #[validate(nested)]
    #[serde(default)]
    pub official_lines: Vec<OfficialLine>,
    #[validate(length(min = 3))]
    pub copy_header: String,
    pub copy_body: String,
    pub last_verified_at: DateTime<Utc>,
    pub status: ContentStatus,
    pub version: u32,
}
