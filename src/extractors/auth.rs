use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::{auth, AppState};

/// Cookie carrying the owner session token
pub const SESSION_COOKIE: &str = "journal_session";

/// Extracts the session token from the `journal_session` cookie (browser)
/// or the Authorization header (API clients and tests)
fn extract_token_from_request(parts: &Parts) -> Option<String> {
    if let Some(cookie_header) = parts.headers.get(header::COOKIE) {
        if let Ok(cookie_str) = cookie_header.to_str() {
            // Parse cookies manually (cookie = "name=value; name2=value2")
            for cookie in cookie_str.split(';') {
                let cookie = cookie.trim();
                if let Some(value) = cookie
                    .strip_prefix(SESSION_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
                {
                    return Some(value.to_string());
                }
            }
        }
    }

    if let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    None
}

/// The owner capability attached to a request.
///
/// Extraction never rejects: a missing or invalid session resolves to
/// `is_admin = false`, and mutating operations fail later at the service's
/// authorization gate. This keeps session transport out of the business
/// logic, which only ever sees the boolean.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    pub is_admin: bool,
}

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = extract_token_from_request(parts);
        let secret = state.config.session_secret.clone();

        async move {
            let is_admin = token
                .map(|token| auth::verify_session(&token, &secret).is_ok())
                .unwrap_or(false);

            Ok(AdminSession { is_admin })
        }
    }
}
