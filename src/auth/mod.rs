//! Password hashing and bearer-token handling.
//!
//! Passwords are hashed with bcrypt; sessions are HS256 JSON Web Tokens
//! carrying the user id and username. Token verification checks both the
//! signature and the expiry claim.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during password or token handling.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,

    /// Username at the time of issue.
    pub username: String,

    /// Expiry as a unix timestamp.
    pub exp: u64,
}

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Check a password against a stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    Ok(bcrypt::verify(password, password_hash)?)
}

/// Issue a signed session token for a user, valid for `ttl_secs` seconds.
pub fn issue_token(
    secret: &str,
    ttl_secs: u64,
    user_id: &str,
    username: &str,
) -> Result<String, AuthError> {
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: unix_now().saturating_add(ttl_secs),
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Verify a session token and return its claims.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(data.claims)
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
