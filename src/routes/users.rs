use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::accounts;
use crate::auth::extractor::AuthUser;
use crate::auth::token;
use crate::error::AppError;
use crate::state::SharedState;

// Missing fields deserialize as empty strings so that an incomplete body
// fails validation with 400 rather than a body-extraction 422.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
pub struct ObtainTokenRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Public view of an account. The password hash never leaves the store.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub email: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    let user = accounts::register_user(&state.pool, &req.email, &req.password, &req.name).await?;

    tracing::info!("User registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            email: user.email,
            name: user.name,
        }),
    ))
}

pub async fn obtain_token(
    State(state): State<SharedState>,
    Json(req): Json<ObtainTokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let value = token::issue(&state.pool, &req.email, &req.password).await?;
    Ok(Json(TokenResponse { token: value }))
}

pub async fn me(auth: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        email: auth.user.email,
        name: auth.user.name,
    })
}

pub async fn update_me(
    State(state): State<SharedState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let updated = accounts::update_profile(
        &state.pool,
        &auth.user,
        req.name.as_deref(),
        req.password.as_deref(),
    )
    .await?;

    Ok(Json(ProfileResponse {
        email: updated.email,
        name: updated.name,
    }))
}
