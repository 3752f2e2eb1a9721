// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Magic-link token decoding.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::user::{Role, User};

/// Claims the panel reads from a magic-link token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub email: String,
    /// Role name, e.g. `EDITOR`
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Expiration time (Unix timestamp); checked when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Decodes tokens into a [`User`], failing closed on anything missing or
/// unknown.
#[derive(Clone)]
pub struct TokenDecoder {
    key: DecodingKey,
    validation: Validation,
    verifies_signature: bool,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("verifies_signature", &self.verifies_signature)
            .finish()
    }
}

impl TokenDecoder {
    /// With a key, signatures are verified with HS256. Without one only
    /// structure and claims are checked.
    pub fn new(verify_key: Option<&[u8]>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_aud = false;

        let key = match verify_key {
            Some(secret) => DecodingKey::from_secret(secret),
            None => {
                validation.insecure_disable_signature_validation();
                DecodingKey::from_secret(&[])
            }
        };

        Self {
            key,
            validation,
            verifies_signature: verify_key.is_some(),
        }
    }

    pub fn decode(&self, token: &str) -> Result<User, AppError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::Decode("empty token".to_string()));
        }

        let data = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| AppError::Decode(e.to_string()))?;
        let claims = data.claims;

        if claims.sub.trim().is_empty() || claims.email.trim().is_empty() {
            return Err(AppError::Decode("empty sub or email claim".to_string()));
        }
        let role: Role = claims
            .role
            .parse()
            .map_err(|e: crate::models::user::UnknownRole| AppError::Decode(e.to_string()))?;

        Ok(User {
            id: claims.sub,
            email: claims.email,
            role,
            name: claims.name,
        })
    }
}

/// Extract the `token` query parameter from a magic-link URL. A bare token
/// (no `?`) is returned as is.
pub fn token_from_link(link: &str) -> Option<String> {
    let link = link.trim();
    let Some((_, query)) = link.split_once('?') else {
        return (!link.is_empty() && !link.contains("://")).then(|| link.to_string());
    };
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "token")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn mint(claims: serde_json::Value, secret: &[u8]) -> String {
        encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret)).unwrap()
    }

    #[test]
    fn decodes_known_role() {
        let token = mint(
            json!({"sub": "u1", "email": "ana@dignemi.org", "role": "ADMIN"}),
            b"anything",
        );
        let user = TokenDecoder::new(None).decode(&token).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn unknown_or_missing_role_fails_closed() {
        let decoder = TokenDecoder::new(None);
        let unknown = mint(json!({"sub": "u1", "email": "a@b.co", "role": "ROOT"}), b"k");
        assert!(matches!(decoder.decode(&unknown), Err(AppError::Decode(_))));

        let missing = mint(json!({"sub": "u1", "email": "a@b.co"}), b"k");
        assert!(matches!(decoder.decode(&missing), Err(AppError::Decode(_))));
    }

    #[test]
    fn verifies_signature_when_keyed() {
        let claims = json!({"sub": "u1", "email": "a@b.co", "role": "EDITOR"});
        let decoder = TokenDecoder::new(Some(b"right"));
        assert!(decoder.decode(&mint(claims.clone(), b"right")).is_ok());
        assert!(decoder.decode(&mint(claims, b"wrong")).is_err());
    }

    #[test]
    fn debug_reports_signature_mode() {
        let keyed = format!("{:?}", TokenDecoder::new(Some(b"k")));
        assert!(keyed.contains("verifies_signature: true"));
        let unkeyed = format!("{:?}", TokenDecoder::new(None));
        assert!(unkeyed.contains("verifies_signature: false"));
    }

    #[test]
    fn rejects_expired_and_malformed() {
        let decoder = TokenDecoder::new(None);
        let expired = mint(
            json!({"sub": "u1", "email": "a@b.co", "role": "EDITOR", "exp": 1_000}),
            b"k",
        );
        assert!(decoder.decode(&expired).is_err());
        assert!(decoder.decode("not-a-jwt").is_err());
        assert!(decoder.decode("").is_err());
    }

    #[test]
    fn token_from_link_reads_query() {
        assert_eq!(
            token_from_link("http://localhost:3001/verify?token=abc%2Edef&x=1").as_deref(),
            Some("abc.def")
        );
        assert_eq!(token_from_link("eyJ.abc.def").as_deref(), Some("eyJ.abc.def"));
        assert_eq!(token_from_link("http://localhost/verify?x=1"), None);
        assert_eq!(token_from_link("   "), None);
    }
}
