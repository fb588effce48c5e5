//! Account lifecycle: registration (regular and superuser) and profile
//! updates. Validation and password hashing happen here; routing and
//! ownership checks stay in the API layer.

use sqlx::SqlitePool;

use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::User;

pub const MIN_PASSWORD_LEN: usize = 5;

/// Emails are stored fully lowercased; lookups go through the same fold.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    Ok(())
}

fn validate_password(raw: &str) -> Result<(), AppError> {
    if raw.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

async fn create(
    pool: &SqlitePool,
    email: &str,
    raw_password: &str,
    name: &str,
    is_staff: bool,
    is_superuser: bool,
) -> Result<User, AppError> {
    let email = normalize_email(email);
    validate_email(&email)?;
    validate_password(raw_password)?;

    if db::users::email_exists(pool, &email).await? {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let password_hash = password::hash(raw_password)?;

    match db::users::create(pool, &email, &password_hash, name, is_staff, is_superuser).await {
        Ok(user) => Ok(user),
        // Lost a race with a concurrent registration for the same email.
        Err(e) if is_unique_violation(&e) => {
            Err(AppError::BadRequest("Email already registered".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Register a standard account.
pub async fn register_user(
    pool: &SqlitePool,
    email: &str,
    raw_password: &str,
    name: &str,
) -> Result<User, AppError> {
    create(pool, email, raw_password, name, false, false).await
}

/// Register a privileged account (staff + superuser). Not reachable over
/// HTTP; used by the startup bootstrap and by tests.
pub async fn register_superuser(
    pool: &SqlitePool,
    email: &str,
    raw_password: &str,
) -> Result<User, AppError> {
    create(pool, email, raw_password, "", true, true).await
}

/// Patch the caller's own profile. Only the provided fields change; a new
/// password is validated and re-hashed before storage.
pub async fn update_profile(
    pool: &SqlitePool,
    user: &User,
    name: Option<&str>,
    raw_password: Option<&str>,
) -> Result<User, AppError> {
    if let Some(raw) = raw_password {
        validate_password(raw)?;
        let password_hash = password::hash(raw)?;
        db::users::update_password(pool, user.id, &password_hash).await?;
    }

    if let Some(name) = name {
        db::users::update_name(pool, user.id, name).await?;
    }

    db::users::find_by_id(pool, user.id)
        .await?
        .ok_or_else(|| AppError::Internal("User disappeared during update".to_string()))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
