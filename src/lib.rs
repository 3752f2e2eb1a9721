// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Dignemi admin: content management client for the Dignemi wellness app.
//!
//! This crate provides the editorial side of the content API: magic-link
//! sign-in, the route/day/block builder with its phone preview, validated
//! forms, and the list views of the catalog.

pub mod auth;
pub mod builder;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod services;
pub mod views;

use std::sync::Arc;

use auth::{FileStore, KeyValueStore, SessionStore, TokenDecoder};
use config::Config;
use error::AppError;
use navigation::{guard_dashboard, Location};
use services::{ApiClient, AuthService, ContentService};

/// Shared application context.
pub struct AdminApp {
    pub config: Config,
    pub session: Arc<SessionStore>,
    pub navigator: Arc<Location>,
    pub api: ApiClient,
    pub auth: AuthService,
    pub content: ContentService,
}

impl AdminApp {
    /// Wire the context over `storage`, hydrating the session from it.
    pub fn new(config: Config, storage: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let session = Arc::new(SessionStore::hydrate(storage)?);
        let navigator = Arc::new(Location::new(&config.start_path));
        let api = ApiClient::new(&config.api_url, session.clone(), navigator.clone());
        let auth = AuthService::new(
            api.clone(),
            TokenDecoder::new(config.token_verify_key.as_deref()),
        );
        let content = ContentService::new(api.clone());

        Ok(Self {
            config,
            session,
            navigator,
            api,
            auth,
            content,
        })
    }

    /// Context backed by the configured session file.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let storage = Arc::new(FileStore::new(&config.session_file));
        Self::new(config, storage)
    }

    /// Gate for dashboard pages; redirects to login when signed out.
    pub fn require_dashboard(&self) -> Result<(), AppError> {
        if guard_dashboard(&self.session, self.navigator.as_ref()) {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
