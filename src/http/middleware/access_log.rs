//! Access logging middleware.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;

use crate::http::request::RequestIdExt;

/// Logs exactly one line per request once the inner handler finishes.
///
/// The line is emitted from a drop guard, so it still appears when the
/// handler panics or the request future is dropped mid-flight.
pub async fn access_log(request: Request, next: Next) -> Response {
    let _guard = LogGuard {
        request_id: request.request_id().unwrap_or("unknown").to_owned(),
        method: request.method().clone(),
        path: request.uri().path().to_owned(),
        remote_addr: request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.to_string())
            .unwrap_or_else(|| "unknown".to_owned()),
        user_agent: request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned(),
    };

    next.run(request).await
}

struct LogGuard {
    request_id: String,
    method: Method,
    path: String,
    remote_addr: String,
    user_agent: String,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        tracing::info!(
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            remote_addr = %self.remote_addr,
            user_agent = %self.user_agent,
            "request handled"
        );
    }
}
