use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::AuthToken;

/// Store a token digest for a user, displacing any token they already hold.
/// The UNIQUE constraint on user_id keeps the relationship one-to-one.
pub async fn replace_for_user(
    pool: &SqlitePool,
    user_id: Uuid,
    token_hash: &str,
) -> Result<AuthToken, sqlx::Error> {
    sqlx::query_as::<_, AuthToken>(
        "INSERT INTO auth_tokens (id, user_id, token_hash, created_at)
         VALUES (?, ?, ?, ?)
         ON CONFLICT (user_id) DO UPDATE
         SET token_hash = excluded.token_hash, created_at = excluded.created_at
         RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(user_id)
    .bind(token_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn find_by_hash(
    pool: &SqlitePool,
    token_hash: &str,
) -> Result<Option<AuthToken>, sqlx::Error> {
    sqlx::query_as::<_, AuthToken>("SELECT * FROM auth_tokens WHERE token_hash = ?")
        .bind(token_hash)
        .fetch_optional(pool)
        .await
}
