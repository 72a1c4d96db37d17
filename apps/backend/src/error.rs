use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::ErrorCode;
use crate::web::trace_ctx;

/// RFC 7807 response body produced for every error.
#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Application-level error type returned by handlers, extractors and
/// middleware. Authentication failures carry no detail beyond a generic
/// message; infrastructure failures are logged server-side and rendered
/// opaquely.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("No token provided")]
    NoToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AppError::NoToken => ErrorCode::UnauthorizedNoToken,
            AppError::InvalidToken => ErrorCode::UnauthorizedInvalidToken,
            AppError::Unauthorized => ErrorCode::Unauthorized,
            AppError::NotFound { code, .. } => *code,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Client-facing detail. Authentication variants stay generic and
    /// infrastructure variants are rendered opaquely; the real detail for
    /// those is only logged server-side.
    fn public_detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::InvalidCredentials => "Email or password not valid".to_string(),
            AppError::NoToken => "No token provided".to_string(),
            AppError::InvalidToken => "Invalid token".to_string(),
            AppError::Unauthorized => "Authentication required".to_string(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Db { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                "An unexpected error occurred while processing the request".to_string()
            }
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NoToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn no_token() -> Self {
        Self::NoToken
    }

    pub fn invalid_token() -> Self {
        Self::InvalidToken
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            // The opaque client response hides the cause; keep it in the logs.
            error!(code = %code, detail = %self, trace_id = %trace_id, "request failed");
        }

        let problem_details = ProblemDetails {
            type_: format!("https://folio.app/errors/{code}"),
            title: Self::humanize_code(code.as_str()),
            status: status.as_u16(),
            detail: self.public_detail(),
            code: code.to_string(),
            trace_id,
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::AppError;
    use crate::errors::ErrorCode;

    #[test]
    fn auth_errors_are_401_and_generic() {
        for err in [
            AppError::invalid_credentials(),
            AppError::no_token(),
            AppError::invalid_token(),
            AppError::unauthorized(),
        ] {
            assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        }

        // Unknown-user and wrong-password must be indistinguishable.
        assert_eq!(
            AppError::invalid_credentials().public_detail(),
            "Email or password not valid"
        );
    }

    #[test]
    fn infra_errors_are_opaque() {
        let err = AppError::db("connection refused to 10.0.0.5:5432");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.public_detail().contains("10.0.0.5"));
    }

    #[test]
    fn validation_errors_keep_field_detail() {
        let err = AppError::validation(
            ErrorCode::InvalidPassword,
            "Password must be at least 8 characters long",
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.public_detail().contains("at least 8 characters"));
    }

    #[test]
    fn humanize_code_title_case() {
        assert_eq!(
            AppError::humanize_code("UNAUTHORIZED_NO_TOKEN"),
            "Unauthorized No Token"
        );
    }
}
