// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Default API base, matching the local backend.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/v1";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the content API, including the version prefix
    pub api_url: String,
    /// File backing the persisted client storage
    pub session_file: PathBuf,
    /// Optional HS256 key; when set, magic-link signatures are verified
    pub token_verify_key: Option<Vec<u8>>,
    /// Location the navigator starts at
    pub start_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local
    /// development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = normalize_base_url(&api_url)?;

        Ok(Self {
            api_url,
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".dignemi/session.json")),
            token_verify_key: env::var("TOKEN_VERIFY_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(String::into_bytes),
            start_path: env::var("START_PATH").unwrap_or_else(|_| "/dashboard".to_string()),
        })
    }

    /// Config for tests: points at `api_url` and keeps storage in a temp file.
    pub fn test_default() -> Self {
        let mut session_file = env::temp_dir();
        session_file.push(format!("dignemi_session_{}.json", std::process::id()));
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file,
            token_verify_key: None,
            start_path: "/dashboard".to_string(),
        }
    }

    /// Same as [`Config::test_default`] with a different API base.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_base_url(api_url)?;
        Ok(self)
    }
}

/// Strip trailing slashes and reject anything that is not http(s).
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            name: "API_URL",
            value: raw.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("API_URL", "https://api.example.org/v1/");
        env::set_var("TOKEN_VERIFY_KEY", "  secret  ");
        env::remove_var("START_PATH");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_url, "https://api.example.org/v1");
        assert_eq!(config.token_verify_key.as_deref(), Some(&b"secret"[..]));
        assert_eq!(config.start_path, "/dashboard");

        env::remove_var("API_URL");
        env::remove_var("TOKEN_VERIFY_KEY");
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = Config::test_default()
            .with_api_url("ftp://example.org")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "API_URL", .. }));
    }
}
