//! Axum route handlers for sessions and the profile.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{Gender, Profile};
use crate::session::store::{Session, SignupForm};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub session_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub form: SignupForm,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub session_id: Uuid,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AccountStatus {
    pub has_signed_up: bool,
    pub logged_in: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub session_id: Uuid,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub email: String,
    pub gender: Option<Gender>,
    pub profile: Profile,
}

impl From<&Session> for ProfileResponse {
    fn from(session: &Session) -> Self {
        Self {
            email: session.user_email.clone(),
            gender: session.user_gender,
            profile: session.profile.clone(),
        }
    }
}

fn status_of(session: &Session) -> AccountStatus {
    AccountStatus {
        has_signed_up: session.has_signed_up,
        logged_in: session.logged_in,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    info!("Session {session_id} created");
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// DELETE /api/v1/sessions
///
/// Forgets the session and everything in it.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(params.session_id).await?;
    info!("Session {} deleted", params.session_id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<AccountStatus>, AppError> {
    let status = state
        .sessions
        .update(req.session_id, |session| {
            session.sign_up(req.form)?;
            Ok(status_of(session))
        })
        .await?;
    Ok(Json(status))
}

/// POST /api/v1/sessions/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AccountStatus>, AppError> {
    let status = state
        .sessions
        .update(req.session_id, |session| {
            session.log_in(&req.email, &req.password)?;
            Ok(status_of(session))
        })
        .await?;
    Ok(Json(status))
}

/// POST /api/v1/sessions/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<AccountStatus>, AppError> {
    let status = state
        .sessions
        .update(req.session_id, |session| {
            session.logged_in = false;
            Ok(status_of(session))
        })
        .await?;
    Ok(Json(status))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let session = state.sessions.get_logged_in(params.session_id).await?;
    Ok(Json(ProfileResponse::from(&session)))
}

/// PUT /api/v1/profile
///
/// Replaces every editable profile field.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    req.profile.validate().map_err(AppError::Validation)?;

    let response = state
        .sessions
        .update(req.session_id, |session| {
            if !session.logged_in {
                return Err(AppError::Unauthorized("Please log in first.".to_string()));
            }
            session.profile = req.profile;
            Ok(ProfileResponse::from(&*session))
        })
        .await?;
    Ok(Json(response))
}
