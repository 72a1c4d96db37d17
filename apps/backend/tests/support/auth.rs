//! Token and cookie helpers for integration tests.

use std::time::{Duration, SystemTime};

use actix_web::cookie::Cookie;
use folio_backend::auth::jwt::{mint_access_token, TOKEN_TTL_SECS};
use folio_backend::middleware::auth_gate::TOKEN_COOKIE;
use folio_backend::state::security_config::SecurityConfig;

/// Mint a valid token for the given sub and email.
pub fn mint_test_token(sub: &str, email: &str, sec: &SecurityConfig) -> String {
    mint_access_token(sub, email, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Mint a token whose 8-hour lifetime has already elapsed.
pub fn mint_expired_token(sub: &str, email: &str, sec: &SecurityConfig) -> String {
    let past = SystemTime::now()
        .checked_sub(Duration::from_secs((TOKEN_TTL_SECS + 3600) as u64))
        .expect("clock should allow subtraction");
    mint_access_token(sub, email, past, sec).expect("should mint expired token successfully")
}

/// Mint a token signed with a different secret than the app's.
pub fn mint_forged_token(sub: &str, email: &str) -> String {
    let other = SecurityConfig::new(b"a_completely_different_secret");
    mint_access_token(sub, email, SystemTime::now(), &other)
        .expect("should mint forged token successfully")
}

/// The `token` cookie as the browser would send it.
pub fn token_cookie(token: &str) -> Cookie<'static> {
    Cookie::new(TOKEN_COOKIE, token.to_string())
}
