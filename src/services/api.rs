// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! HTTP gateway to the content API.
//!
//! Every request carries the session's bearer token when there is one.
//! A 401 from any endpoint clears the session, sends the navigator to the
//! login page, and surfaces as [`AppError::Unauthorized`].

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::SessionStore;
use crate::error::AppError;
use crate::navigation::{redirect_to_login, Navigator};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "API request");

        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => {
                tracing::warn!(path, "No session token, sending request without authorization");
                builder
            }
        }
    }

    /// GET and parse a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        let text = self.read_body(response).await?;
        serde_json::from_str(&text).map_err(|e| AppError::UnexpectedResponse(e.to_string()))
    }

    /// POST a JSON body. An empty response body yields `T::default()`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        self.parse_optional(response).await
    }

    /// POST a JSON body to an endpoint with no response contract. Any 2xx
    /// body is read and dropped.
    pub async fn post_ignore<B>(&self, path: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        self.read_body(response).await?;
        Ok(())
    }

    /// PATCH a JSON body. An empty response body yields `T::default()`.
    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let response = self.send(self.request(Method::PATCH, path).json(body)).await?;
        self.parse_optional(response).await
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        self.check_response(response).await
    }

    /// Map non-success statuses to errors, handling 401 session expiry.
    async fn check_response(&self, response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Session expired or invalid (401), redirecting to login");
            if let Err(e) = self.session.expire() {
                tracing::error!(error = %e, "Failed to clear stored session");
            }
            redirect_to_login(self.navigator.as_ref());
            return Err(AppError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body);
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), body = %body, "API server error");
        } else {
            tracing::warn!(status = status.as_u16(), message = ?message, "API request rejected");
        }

        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_body(&self, response: Response) -> Result<String, AppError> {
        response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))
    }

    async fn parse_optional<T: DeserializeOwned + Default>(
        &self,
        response: Response,
    ) -> Result<T, AppError> {
        let text = self.read_body(response).await?;
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&text).map_err(|e| AppError::UnexpectedResponse(e.to_string()))
    }
}

/// The `message` field of an error body, which may be a string or a list
/// of strings.
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = match value.get("message")? {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!message.trim().is_empty()).then_some(message)
}
