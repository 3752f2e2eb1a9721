// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Content catalog reads and create/update submits.
//!
//! Every submit validates locally first; a failing form never reaches the
//! network. Submits of one editor go through its [`MutationGate`], so a
//! second submit while one is in flight is refused.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::builder::RouteBuilder;
use crate::error::AppError;
use crate::forms::activity::ActivityForm;
use crate::forms::route::{RouteCreateForm, RouteMetadataForm};
use crate::forms::validation::check;
use crate::forms::Tracked;
use crate::models::payload::{ContentDetail, ContentPayload, ContentRef, UpdateContentPayload};
use crate::models::route::RouteListItem;
use crate::navigation::{ACTIVITIES_PATH, ROUTES_PATH};
use crate::services::api::ApiClient;

/// At most one in-flight mutation.
#[derive(Debug, Default)]
pub struct MutationGate {
    pending: AtomicBool,
}

impl MutationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate until the returned guard drops.
    pub fn enter(&self) -> Result<MutationGuard<'_>, AppError> {
        if self.pending.swap(true, Ordering::AcqRel) {
            return Err(AppError::SubmitPending);
        }
        Ok(MutationGuard { gate: self })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Re-opens the gate on drop, whether the mutation succeeded or not.
#[derive(Debug)]
pub struct MutationGuard<'a> {
    gate: &'a MutationGate,
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.gate.pending.store(false, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct ContentService {
    api: ApiClient,
    gate: MutationGate,
}

impl ContentService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            gate: MutationGate::new(),
        }
    }

    pub fn gate(&self) -> &MutationGate {
        &self.gate
    }

    pub async fn get_catalog(&self) -> Result<Vec<RouteListItem>, AppError> {
        let items: Vec<RouteListItem> = self.api.get_json("/content/catalog").await?;
        tracing::debug!(count = items.len(), "Fetched catalog");
        Ok(items)
    }

    pub async fn get_route(&self, id: &str) -> Result<ContentDetail, AppError> {
        let path = format!("/content/routes/{}", urlencoding::encode(id));
        self.api.get_json(&path).await
    }

    /// Fetch a route and split it into metadata form and builder.
    pub async fn load_program(&self, id: &str) -> Result<(RouteMetadataForm, RouteBuilder), AppError> {
        let detail = self.get_route(id).await?;
        RouteMetadataForm::from_detail(&detail)
    }

    pub async fn create(&self, payload: &ContentPayload) -> Result<ContentRef, AppError> {
        let created: ContentRef = self.api.post_json("/content", payload).await?;
        tracing::info!(
            content_type = payload.content.type_name(),
            id = ?created.id,
            "Content created"
        );
        Ok(created)
    }

    pub async fn update(
        &self,
        id: &str,
        payload: &UpdateContentPayload,
    ) -> Result<ContentRef, AppError> {
        if payload.is_empty() {
            return Err(AppError::InvalidInput("Nada que actualizar".to_string()));
        }
        let path = format!("/content/{}", urlencoding::encode(id));
        let mut updated: ContentRef = self.api.patch_json(&path, payload).await?;
        updated.id.get_or_insert_with(|| id.to_string());
        tracing::info!(id, "Content updated");
        Ok(updated)
    }

    /// Validate and create a route from the flat step form, then return to
    /// the route list.
    pub async fn submit_route_form(&self, form: &RouteCreateForm) -> Result<ContentRef, AppError> {
        check(form).map_err(AppError::Validation)?;
        let _guard = self.gate.enter()?;

        let created = self.create(&form.to_payload()).await?;
        self.api.navigator().navigate(ROUTES_PATH);
        Ok(created)
    }

    /// Validate and save the builder's program: create when `id` is `None`,
    /// patch otherwise. A validation failure focuses the first day in error.
    pub async fn save_program(
        &self,
        id: Option<&str>,
        form: &RouteMetadataForm,
        builder: &mut RouteBuilder,
    ) -> Result<ContentRef, AppError> {
        if let Err(report) = form.validate_with(builder) {
            if let Some(first) = report.errors().iter().find(|e| e.index_of("days").is_some()) {
                builder.focus_error(first);
            }
            return Err(AppError::Validation(report));
        }
        let _guard = self.gate.enter()?;

        let saved = match id {
            Some(id) => self.update(id, &form.to_update(builder)).await?,
            None => self.create(&form.to_payload(builder)).await?,
        };
        builder.mark_saved();
        Ok(saved)
    }

    /// Validate and save an activity as exercise content. The form is
    /// marked saved only when the API accepted it.
    pub async fn save_activity(
        &self,
        form: &mut Tracked<ActivityForm>,
    ) -> Result<ContentRef, AppError> {
        form.get().validate_form().map_err(AppError::Validation)?;
        let _guard = self.gate.enter()?;

        let created = self.create(&form.get().to_exercise_payload()).await?;
        form.mark_saved();
        self.api.navigator().navigate(ACTIVITIES_PATH);
        Ok(created)
    }
}
