//! Response decoration shared across handlers.

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tower_http::set_header::SetResponseHeaderLayer;

/// Header identifying the license of the running build.
pub const X_LICENSE: &str = "x-license";

/// Static license identification attached to every response.
pub const LICENSE: &str = "AGPLv3 http://www.gnu.org/licenses/agpl-3.0.txt";

/// Layer stamping the `X-License` header on every response, whatever
/// the route or status.
pub fn build_info_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(X_LICENSE),
        HeaderValue::from_static(LICENSE),
    )
}

/// Plain-text response carrying the canonical status phrase as its body.
pub fn status_text(status: StatusCode) -> Response {
    (status, status.canonical_reason().unwrap_or_default()).into_response()
}
