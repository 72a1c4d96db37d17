use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

use crate::auth::identity::Identity;
use crate::error::AppError;

/// The authenticated caller, extracted from the `Identity` the auth gate
/// stored in request extensions. Handlers taking `AuthUser` never look at
/// tokens or identity headers themselves.
///
/// On a route that was not wrapped by the gate (or when the gate rejected
/// the request) the extension is absent and extraction fails with 401.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<Identity>().cloned();

        ready(
            identity
                .map(|identity| AuthUser {
                    user_id: identity.user_id,
                    email: identity.email,
                })
                .ok_or_else(AppError::unauthorized),
        )
    }
}
