use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Canonical token lifetime: 8 hours from issuance. The cookie the client
/// stores is expected to carry the same expiry.
pub const TOKEN_TTL_SECS: i64 = 8 * 60 * 60;

/// Claims included in our backend-issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User identifier (users.id as a uuid string)
    pub sub: String,
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Mint an HS256 JWT access token with an 8-hour TTL.
///
/// Pure function of identity + current time + secret key. Fails only when
/// the clock or the signing key is unusable, which is a configuration
/// problem rather than a per-request condition.
pub fn mint_access_token(
    sub: &str,
    email: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("system clock is before the epoch"))?
        .as_secs() as i64;

    let claims = Claims {
        sub: sub.to_string(),
        email: email.to_string(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::config(format!("failed to encode JWT: {e}")))
}

/// Verify a token's signature and expiry and return its claims.
///
/// Every failure mode (malformed, forged, expired) collapses into the same
/// `AppError::InvalidToken`; the distinction is logged at debug level only,
/// never surfaced to the caller.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                debug!("token rejected: expired");
            }
            jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                debug!("token rejected: invalid signature");
            }
            kind => {
                debug!(?kind, "token rejected");
            }
        }
        AppError::invalid_token()
    })
}
