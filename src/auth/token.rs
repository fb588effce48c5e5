use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

use crate::accounts;
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::User;

/// Generate a new opaque token value: 32 random bytes, hex encoded.
pub fn generate() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

/// SHA-256 digest of a token. Only digests are stored.
pub fn digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Verify credentials and issue a fresh token for the user, replacing any
/// token previously issued to them. Unknown email, wrong password and
/// inactive account all fail identically so accounts cannot be enumerated.
pub async fn issue(pool: &SqlitePool, email: &str, raw_password: &str) -> Result<String, AppError> {
    let invalid = || AppError::BadRequest("Unable to authenticate with provided credentials".to_string());

    let email = accounts::normalize_email(email);
    let user = db::users::find_by_email(pool, &email)
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active || !password::verify(raw_password, &user.password_hash)? {
        return Err(invalid());
    }

    let token = generate();
    db::tokens::replace_for_user(pool, user.id, &digest(&token)).await?;

    Ok(token)
}

/// Resolve a bearer token to its owning user. Unknown tokens and tokens
/// belonging to deactivated users are rejected.
pub async fn resolve(pool: &SqlitePool, token: &str) -> Result<User, AppError> {
    let rejected = || AppError::Unauthorized("Invalid authentication token".to_string());

    let stored = db::tokens::find_by_hash(pool, &digest(token))
        .await?
        .ok_or_else(rejected)?;

    let user = db::users::find_by_id(pool, stored.user_id)
        .await?
        .ok_or_else(rejected)?;

    if !user.is_active {
        return Err(rejected());
    }

    Ok(user)
}
