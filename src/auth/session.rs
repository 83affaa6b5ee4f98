use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

/// Session lifetime. Matches the cookie max-age the login handler sets.
pub const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 30;

const SESSION_SUBJECT: &str = "admin";

/// Issue an owner session token.
/// Token format: base64(subject:expiry_timestamp:hmac_signature)
pub fn issue_session(secret: &str) -> AppResult<String> {
    let expiry_time = chrono::Utc::now().timestamp() + SESSION_MAX_AGE_SECS;
    issue_session_until(secret, expiry_time)
}

fn issue_session_until(secret: &str, expiry_time: i64) -> AppResult<String> {
    let payload = format!("{}:{}", SESSION_SUBJECT, expiry_time);
    let signature = sign(&payload, secret)?;
    let token_data = format!("{}:{}", payload, signature);

    Ok(STANDARD.encode(token_data.as_bytes()))
}

/// Validate a session token. Succeeds only for a well-formed, unexpired
/// token whose signature verifies against `secret`.
pub fn verify_session(token: &str, secret: &str) -> AppResult<()> {
    let decoded_bytes = STANDARD
        .decode(token)
        .map_err(|_| AppError::Unauthorized("Invalid session format".to_string()))?;

    let decoded = String::from_utf8(decoded_bytes)
        .map_err(|_| AppError::Unauthorized("Invalid session encoding".to_string()))?;

    // Parse token: subject:expiry_time:signature
    let parts: Vec<&str> = decoded.split(':').collect();

    if parts.len() != 3 || parts[0] != SESSION_SUBJECT {
        return Err(AppError::Unauthorized(
            "Invalid session structure".to_string(),
        ));
    }

    let expiry_time: i64 = parts[1]
        .parse()
        .map_err(|_| AppError::Unauthorized("Invalid session expiry".to_string()))?;

    if chrono::Utc::now().timestamp() > expiry_time {
        return Err(AppError::Unauthorized("Session has expired".to_string()));
    }

    let payload = format!("{}:{}", SESSION_SUBJECT, expiry_time);
    let expected_signature = sign(&payload, secret)?;

    // Constant-time comparison to prevent timing attacks
    let matches: bool = parts[2]
        .as_bytes()
        .ct_eq(expected_signature.as_bytes())
        .into();
    if !matches {
        return Err(AppError::Unauthorized(
            "Invalid session signature".to_string(),
        ));
    }

    Ok(())
}

/// HMAC-SHA256 over the payload, hex-encoded
fn sign(data: &str, secret: &str) -> AppResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::Internal(format!("HMAC initialization error: {}", e)))?;

    mac.update(data.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}
