// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Field-path validation reports built on top of `validator`.
//!
//! `validator` reports nested failures as a tree of structs and lists.
//! Editors need a flat list keyed by path (`days[1].blocks[0].title`) so
//! they can move focus to the offending field.

use std::borrow::Cow;
use std::fmt;

use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors, ValidationErrorsKind};

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path with list indices, e.g. `steps[0].title`
    pub path: String,
    /// Rule that failed (`length`, `range`, `url`, ...)
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Index following `segment` in the path: `index_of("days")` on
    /// `days[2].title` is `Some(2)`.
    pub fn index_of(&self, segment: &str) -> Option<usize> {
        let needle = format!("{segment}[");
        let start = self.path.find(&needle)? + needle.len();
        let rest = &self.path[start..];
        let end = rest.find(']')?;
        rest[..end].parse().ok()
    }
}

/// All failing fields of one submit, sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
        self.errors.sort_by(|a, b| a.path.cmp(&b.path));
    }

    /// Validate `value` and add its failures under `prefix`.
    pub fn check_at<T: Validate>(&mut self, prefix: &str, value: &T) {
        if let Err(errors) = value.validate() {
            flatten_into(prefix, &errors, &mut self.errors);
            self.errors.sort_by(|a, b| a.path.cmp(&b.path));
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }

    /// First message for an exact path, for inline display next to a field.
    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// One line per failing field.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paths: Vec<&str> = self.errors.iter().map(|e| e.path.as_str()).collect();
        write!(f, "{} invalid field(s): {}", self.errors.len(), paths.join(", "))
    }
}

/// Validate a value with its derived schema.
pub fn check<T: Validate>(value: &T) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::new();
    report.check_at("", value);
    report.into_result()
}

fn join_path(prefix: &str, field: &str) -> String {
    match (prefix.is_empty(), field == "__all__") {
        (_, true) => prefix.to_string(),
        (true, false) => field.to_string(),
        (false, false) => format!("{prefix}.{field}"),
    }
}

fn flatten_into(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = join_path(prefix, &field.to_string());
        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|err| FieldError {
                    path: path.clone(),
                    code: err.code.to_string(),
                    message: message_of(err),
                }));
            }
            ValidationErrorsKind::Struct(inner) => flatten_into(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten_into(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn message_of(err: &ValidationError) -> String {
    match &err.message {
        Some(msg) => msg.to_string(),
        None => match err.code.as_ref() {
            "length" => "Longitud inválida".to_string(),
            "range" => "Valor fuera de rango".to_string(),
            "url" => "URL inválida".to_string(),
            "email" => "Correo inválido".to_string(),
            other => format!("Valor inválido ({other})"),
        },
    }
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

// ─── Custom rules shared by the schemas ──────────────────────

/// Slugs are lowercase ASCII letters, digits and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(rule("slug", "Slug inválido (solo a-z, 0-9, -)"))
    }
}

/// Accepts an empty string or an absolute URL.
pub fn validate_url_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(rule("url", "URL inválida"))
    }
}

/// Every entry must have non-whitespace content.
pub fn validate_non_empty_entries(entries: &[String]) -> Result<(), ValidationError> {
    if entries.iter().all(|s| !s.trim().is_empty()) {
        Ok(())
    } else {
        Err(rule("non_empty", "Fuente no puede estar vacía"))
    }
}
