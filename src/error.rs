// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Application error types with consistent user-facing messages.

use crate::auth::storage::StorageError;
use crate::forms::validation::ValidationReport;

/// Fallback shown when the server gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error inesperado. Intenta de nuevo.";
/// Shown when a request fails before any response arrives.
pub const NETWORK_ERROR_MESSAGE: &str = "Error al conectar con el servidor.";
/// Shown when a magic-link token cannot be decoded.
pub const INVALID_TOKEN_MESSAGE: &str = "Token inválido";

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A form failed its schema; no request was sent.
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    /// The request failed before a response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered 401. The session has already been cleared.
    #[error("Authentication required")]
    Unauthorized,

    /// Any other non-success status.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    /// Malformed or unacceptable magic-link token.
    #[error("Invalid token: {0}")]
    Decode(String),

    /// A success response whose body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A mutation is already in flight for this editor.
    #[error("A save is already in progress")]
    SubmitPending,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Text for the blocking alert shown at the boundary that caught the error.
    pub fn alert_message(&self) -> String {
        match self {
            AppError::Validation(report) => report.summary(),
            AppError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            AppError::Unauthorized => "Sesión expirada. Inicia sesión de nuevo.".to_string(),
            AppError::Api {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            AppError::Api { .. } => GENERIC_ERROR_MESSAGE.to_string(),
            AppError::Decode(_) => INVALID_TOKEN_MESSAGE.to_string(),
            AppError::SubmitPending => "Guardando...".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::UnexpectedResponse(_) | AppError::Storage(_) | AppError::Internal(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Whether the error was raised locally without touching the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::Decode(_)
                | AppError::InvalidInput(_)
                | AppError::SubmitPending
        )
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;
