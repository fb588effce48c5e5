use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored authentication token. Only the SHA-256 digest of the opaque
/// bearer value is persisted; the raw token is returned to the client once.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AuthToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
}
