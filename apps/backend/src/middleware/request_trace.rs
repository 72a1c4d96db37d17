//! Request id middleware.
//!
//! Assigns every request a trace id and echoes it in the `x-request-id`
//! response header. An inbound `x-request-id` is honored when it is a valid
//! UUID, so a fronting proxy (or the frontend) can correlate its own logs
//! with ours; anything else is replaced with a freshly minted v4.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

/// Header carrying the trace id, on both requests and responses.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Trace id assigned by [`RequestTrace`], stored in request extensions.
/// Downstream middleware reads this instead of re-deriving an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(String);

impl TraceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reuse a well-formed inbound request id, otherwise mint a new one.
fn resolve_trace_id(headers: &HeaderMap) -> TraceId {
    let inbound = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| Uuid::parse_str(v).is_ok());

    match inbound {
        Some(id) => TraceId(id.to_string()),
        None => TraceId(Uuid::new_v4().to_string()),
    }
}

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = resolve_trace_id(req.headers());
        req.extensions_mut().insert(trace_id.clone());

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            res.headers_mut().insert(
                HeaderName::from_static(REQUEST_ID_HEADER),
                HeaderValue::from_str(trace_id.as_str())
                    .unwrap_or_else(|_| HeaderValue::from_static("invalid-trace-id")),
            );

            Ok(res)
        })
    }
}
