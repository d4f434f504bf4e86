//! Admin API tokens.
//!
//! Ghost admin keys have the form `<id>:<hex-secret>`. Each request carries
//! a freshly signed HS256 JWT whose header `kid` is the key id and whose
//! audience is the versioned admin path. Tokens live for five minutes and
//! are never reused.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ClientError, Result};

/// Lifetime of a signed admin token.
pub const TOKEN_LIFETIME_SECS: i64 = 5 * 60;

/// Claims Ghost checks on an admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

/// Splits an admin key into its id and decoded secret.
pub fn split_key(key: &str) -> Result<(&str, Vec<u8>)> {
    let mut parts = key.split(':');
    let (id, secret) = match (parts.next(), parts.next(), parts.next()) {
        (Some(id), Some(secret), None) => (id, secret),
        _ => return Err(ClientError::MalformedCredential),
    };

    Ok((id, hex::decode(secret)?))
}

/// Signs a token for `key` with the audience `/<version>/admin/`.
pub fn generate_token(key: &str, version: &str) -> Result<String> {
    let (id, secret) = split_key(key)?;
    if secret.is_empty() {
        return Err(ClientError::Signing(ErrorKind::InvalidKeyFormat.into()));
    }

    let now = Utc::now();
    let claims = Claims {
        aud: format!("/{version}/admin/"),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(TOKEN_LIFETIME_SECS)).timestamp(),
    };

    let header = Header {
        kid: Some(id.to_string()),
        ..Header::new(Algorithm::HS256)
    };

    let token = jsonwebtoken::encode(&header, &claims, &EncodingKey::from_secret(&secret))?;
    trace!(kid = id, iat = claims.iat, "signed admin token");
    Ok(token)
}
