use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use utoipa::ToSchema;

use crate::{
    auth,
    extractors::{auth::SESSION_COOKIE, AdminSession},
    AppError, AppResult, AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// POST /api/auth/login - Verify owner credentials and set the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = SessionResponse),
        (status = 401, description = "Missing or invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Response> {
    if input.email.is_empty() {
        return Err(AppError::Unauthorized("Email is required".to_string()));
    }
    if input.password.is_empty() {
        return Err(AppError::Unauthorized("Password is required".to_string()));
    }

    // Constant-time comparison to prevent timing attacks
    let email_ok: bool = input
        .email
        .as_bytes()
        .ct_eq(state.config.admin_email.as_bytes())
        .into();
    let password_ok: bool = input
        .password
        .as_bytes()
        .ct_eq(state.config.admin_password.as_bytes())
        .into();

    if !(email_ok && password_ok) {
        tracing::warn!("Failed login attempt");
        return Err(AppError::Unauthorized("Invalid login".to_string()));
    }

    let token = auth::issue_session(&state.config.session_secret)?;
    let cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        auth::SESSION_MAX_AGE_SECS
    );

    tracing::info!("Owner logged in");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse { is_admin: true }),
    )
        .into_response())
}

/// POST /api/auth/logout - Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = SessionResponse)
    ),
    tag = "auth",
    security(("cookie_auth" = []))
)]
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{}=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0", SESSION_COOKIE);

    (
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse { is_admin: false }),
    )
}

/// GET /api/auth/me - Whether the caller holds the owner session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session state", body = SessionResponse)
    ),
    tag = "auth"
)]
pub async fn get_me(session: AdminSession) -> Json<SessionResponse> {
    Json(SessionResponse {
        is_admin: session.is_admin,
    })
}
