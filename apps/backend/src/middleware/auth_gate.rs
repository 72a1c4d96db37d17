//! Request gate middleware.
//!
//! Intercepts every request under the `/api` scope. Client-supplied
//! `x-user-id` / `x-user-email` headers are stripped unconditionally, then
//! allow-listed paths pass through. Everything else needs a valid token in
//! the `token` cookie; on success the verified identity is stored in request
//! extensions and re-written into the identity headers, so downstream
//! handlers only ever see gate-produced values.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::http::Method;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

use crate::auth::identity::Identity;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Cookie the bearer token is read from.
pub const TOKEN_COOKIE: &str = "token";

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Unauthenticated paths. Method-aware: only the portfolio *read* is
/// public; writes to the same path go through the gate.
fn is_exempt(method: &Method, path: &str) -> bool {
    path.starts_with("/api/auth") || (*method == Method::GET && path == "/api/portfolio")
}

pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware { service }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        // Identity headers are gate-owned. Whatever the client sent is
        // dropped before any other decision is made, exempt paths included.
        req.headers_mut().remove(USER_ID_HEADER);
        req.headers_mut().remove(USER_EMAIL_HEADER);

        if is_exempt(req.method(), req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let token = match req.cookie(TOKEN_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => {
                return Box::pin(async move { Ok(deny(req, AppError::no_token())) });
            }
        };

        let app_state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state.clone(),
            None => {
                return Box::pin(async move {
                    Ok(deny(req, AppError::internal("AppState not available")))
                });
            }
        };

        let claims = match verify_access_token(&token, &app_state.security) {
            Ok(claims) => claims,
            Err(e) => {
                return Box::pin(async move { Ok(deny(req, e)) });
            }
        };

        // The sub claim is a user id minted by us; anything else is a bad token.
        let identity = match identity_from_claims(&claims.sub, &claims.email) {
            Ok(identity) => identity,
            Err(e) => {
                return Box::pin(async move { Ok(deny(req, e)) });
            }
        };

        match (
            HeaderValue::from_str(&claims.sub),
            HeaderValue::from_str(&claims.email),
        ) {
            (Ok(id_value), Ok(email_value)) => {
                req.headers_mut()
                    .insert(HeaderName::from_static(USER_ID_HEADER), id_value);
                req.headers_mut()
                    .insert(HeaderName::from_static(USER_EMAIL_HEADER), email_value);
            }
            _ => {
                return Box::pin(async move { Ok(deny(req, AppError::invalid_token())) });
            }
        }

        // Store the verified identity BEFORE calling the service.
        req.extensions_mut().insert(identity);

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}

/// Render a gate rejection as a response so it flows back through the outer
/// trace/logging middleware. Must run inside the awaited future, where the
/// task-local trace context is in scope for the problem body's `trace_id`.
fn deny<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    req.into_response(err.error_response()).map_into_right_body()
}

fn identity_from_claims(sub: &str, email: &str) -> Result<Identity, AppError> {
    let user_id = Uuid::parse_str(sub).map_err(|_| AppError::invalid_token())?;
    Ok(Identity {
        user_id,
        email: email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::Method;

    use super::{identity_from_claims, is_exempt};

    #[test]
    fn test_auth_paths_are_exempt() {
        assert!(is_exempt(&Method::POST, "/api/auth/login"));
        assert!(is_exempt(&Method::GET, "/api/auth/login"));
    }

    #[test]
    fn test_portfolio_read_is_exempt_but_write_is_not() {
        assert!(is_exempt(&Method::GET, "/api/portfolio"));
        assert!(!is_exempt(&Method::PUT, "/api/portfolio"));
        assert!(!is_exempt(&Method::POST, "/api/portfolio"));
    }

    #[test]
    fn test_protected_paths_are_not_exempt() {
        assert!(!is_exempt(&Method::GET, "/api/projects"));
        assert!(!is_exempt(&Method::GET, "/api/messages"));
        assert!(!is_exempt(&Method::GET, "/api/portfolio/other"));
    }

    #[test]
    fn test_identity_requires_uuid_sub() {
        assert!(identity_from_claims("not-a-uuid", "a@example.com").is_err());
        assert!(identity_from_claims("e58ed763-928c-4155-bee9-fdbaaadc15f3", "a@example.com")
            .is_ok());
    }
}
