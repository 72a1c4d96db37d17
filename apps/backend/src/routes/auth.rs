//! Login endpoint.

use std::sync::LazyLock;

use actix_web::{post, web, HttpResponse};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::validated_json::ValidatedJson;
use crate::logging::pii::Redacted;
use crate::services;
use crate::state::app_state::AppState;

const MIN_PASSWORD_LEN: usize = 8;

fn email_format() -> &'static Regex {
    static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
    });
    &EMAIL_FORMAT
}

/// Both fields default to empty so a missing key and an empty value fail
/// the same validation path instead of producing a deserialization error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Shape checks that run before any database access. Failures here are 400s
/// with field-level detail; once the shape is valid, every credential
/// problem downstream collapses into the generic 401.
fn validate_login(req: &LoginRequest) -> Result<(), AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::validation(
            ErrorCode::MissingField,
            "Email and password are required",
        ));
    }
    if !email_format().is_match(&req.email) {
        return Err(AppError::validation(
            ErrorCode::InvalidEmail,
            "Please enter a valid email address",
        ));
    }
    // Characters, not bytes: a multibyte password must not sneak past the
    // minimum on byte count alone.
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(
            ErrorCode::InvalidPassword,
            "Password must be at least 8 characters long",
        ));
    }
    Ok(())
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    validate_login(&body)?;

    debug!(email = %Redacted(&body.email), "login attempt");

    let token =
        services::auth::authenticate(&state.db, &body.email, &body.password, &state.security)
            .await?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::{validate_login, LoginRequest};
    use crate::error::AppError;
    use crate::errors::ErrorCode;

    fn req(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_missing_fields() {
        for (email, password) in [("", ""), ("a@b.co", ""), ("", "longenough")] {
            let err = validate_login(&req(email, password)).unwrap_err();
            assert!(matches!(
                err,
                AppError::Validation {
                    code: ErrorCode::MissingField,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_email_format() {
        for bad in ["not-an-email", "a@b", "a b@c.com", "a@b .com"] {
            let err = validate_login(&req(bad, "longenough")).unwrap_err();
            assert!(
                matches!(
                    err,
                    AppError::Validation {
                        code: ErrorCode::InvalidEmail,
                        ..
                    }
                ),
                "expected invalid email for {bad:?}"
            );
        }
        assert!(validate_login(&req("owner@example.com", "longenough")).is_ok());
    }

    #[test]
    fn test_password_minimum_length() {
        let err = validate_login(&req("owner@example.com", "short")).unwrap_err();
        match err {
            AppError::Validation { code, detail } => {
                assert_eq!(code, ErrorCode::InvalidPassword);
                assert!(detail.contains("at least 8 characters"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Exactly 8 characters passes.
        assert!(validate_login(&req("owner@example.com", "12345678")).is_ok());
    }

    #[test]
    fn test_password_length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes in UTF-8.
        let err = validate_login(&req("owner@example.com", "ññññ")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation {
                code: ErrorCode::InvalidPassword,
                ..
            }
        ));

        // 8 characters, 16 bytes.
        assert!(validate_login(&req("owner@example.com", "ññññññññ")).is_ok());
    }
}
