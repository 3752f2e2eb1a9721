// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Magic-link login and session verification.

use std::sync::Arc;

use serde_json::json;

use crate::auth::{token_from_link, SessionStore, TokenDecoder};
use crate::error::AppError;
use crate::forms::login::LoginForm;
use crate::forms::validation::check;
use crate::models::user::User;
use crate::navigation::{Navigator, DASHBOARD_PATH, LOGIN_PATH};
use crate::services::api::ApiClient;

/// Shown once the API accepted a magic-link request.
pub const LINK_SENT_MESSAGE: &str = "¡Enlace enviado! Revisa tu correo electrónico.";

#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
    decoder: TokenDecoder,
}

impl AuthService {
    pub fn new(api: ApiClient, decoder: TokenDecoder) -> Self {
        Self { api, decoder }
    }

    fn session(&self) -> &Arc<SessionStore> {
        self.api.session()
    }

    fn navigator(&self) -> &Arc<dyn Navigator> {
        self.api.navigator()
    }

    /// Ask the API to email a magic link. The response body is ignored.
    pub async fn request_magic_link(&self, form: &LoginForm) -> Result<(), AppError> {
        check(form).map_err(AppError::Validation)?;

        self.api
            .post_ignore("/auth/login", &json!({ "email": form.email }))
            .await?;

        tracing::info!("Magic link requested");
        Ok(())
    }

    /// Establish a session from a magic-link URL or a pasted token, then
    /// go to the dashboard.
    pub fn verify(&self, link_or_token: &str) -> Result<User, AppError> {
        let token = token_from_link(link_or_token)
            .ok_or_else(|| AppError::Decode("no token in link".to_string()))?;
        let user = self.decoder.decode(&token)?;

        self.session().login(&token, user.clone())?;
        self.navigator().navigate(DASHBOARD_PATH);

        tracing::info!(user_id = %user.id, role = %user.role, "Signed in");
        Ok(user)
    }

    /// Current user as the API sees it.
    pub async fn get_me(&self) -> Result<User, AppError> {
        self.api.get_json("/auth/me").await
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.session().logout()?;
        self.navigator().navigate(LOGIN_PATH);
        tracing::info!("Signed out");
        Ok(())
    }
}
