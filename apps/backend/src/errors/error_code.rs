//! Error codes for the folio backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the folio backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// No bearer token cookie on a protected request
    UnauthorizedNoToken,
    /// Token failed verification (malformed, forged, or expired)
    UnauthorizedInvalidToken,
    /// Unknown email or wrong password (never distinguished)
    InvalidCredentials,

    // Request Validation
    /// General bad request error
    BadRequest,
    /// A required field is missing or empty
    MissingField,
    /// Invalid email address
    InvalidEmail,
    /// Password does not meet the minimum length
    InvalidPassword,

    // Resource Not Found
    /// Portfolio not found
    PortfolioNotFound,
    /// Project not found
    ProjectNotFound,
    /// Skill not found
    SkillNotFound,

    // System Errors
    /// Database error
    DbError,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Canonical wire representation of the code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::UnauthorizedNoToken => "UNAUTHORIZED_NO_TOKEN",
            ErrorCode::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::PortfolioNotFound => "PORTFOLIO_NOT_FOUND",
            ErrorCode::ProjectNotFound => "PROJECT_NOT_FOUND",
            ErrorCode::SkillNotFound => "SKILL_NOT_FOUND",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
