//! Request handlers for the document and health endpoints.

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::response::status_text;
use crate::http::server::AppState;
use crate::security::parse_credentials;

/// Multipart field supplying the semicolon-delimited credentials.
pub const CREDENTIALS_FIELD: &str = "UploadPlugin";

/// Multipart field carrying the replacement document.
pub const UPLOAD_FIELD: &str = "userfile";

/// Root endpoint. Also the catch-all, so any path other than `/` is an
/// unknown URL and yields 404.
pub async fn document(State(state): State<AppState>, request: Request) -> Response {
    if request.uri().path() != "/" {
        return status_text(StatusCode::NOT_FOUND);
    }

    let mut response = if request.method() == Method::GET {
        serve_document(&state).await
    } else if request.method() == Method::POST {
        replace_document(&state, request).await
    } else {
        status_text(StatusCode::BAD_REQUEST)
    };

    response.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}

/// Liveness endpoint. Ignores method and body.
pub async fn healthz(State(state): State<AppState>) -> StatusCode {
    if state.health.is_serving() {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn serve_document(state: &AppState) -> Response {
    match state.document.load().await {
        Ok(contents) => (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            )],
            contents,
        )
            .into_response(),
        Err(error) => {
            tracing::debug!(
                path = %state.document.path().display(),
                %error,
                "document not readable"
            );
            status_text(StatusCode::NOT_FOUND)
        }
    }
}

async fn replace_document(state: &AppState, request: Request) -> Response {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if !content_type.starts_with("multipart/form-data") {
        return status_text(StatusCode::BAD_REQUEST);
    }

    let mut multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "upload is not a readable multipart form");
            return status_text(StatusCode::BAD_REQUEST);
        }
    };

    let mut raw_credentials: Option<String> = None;
    let mut upload: Option<Bytes> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(error) => {
                tracing::debug!(%error, "multipart decode failed");
                return status_text(StatusCode::BAD_REQUEST);
            }
        };

        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(CREDENTIALS_FIELD) => match field.text().await {
                Ok(text) => raw_credentials = Some(text),
                Err(error) => {
                    tracing::debug!(%error, "credentials field unreadable");
                    return status_text(StatusCode::BAD_REQUEST);
                }
            },
            Some(UPLOAD_FIELD) => match field.bytes().await {
                Ok(bytes) => upload = Some(bytes),
                Err(error) => {
                    tracing::debug!(%error, "upload field unreadable");
                    return status_text(StatusCode::BAD_REQUEST);
                }
            },
            _ => {}
        }
    }

    let raw_credentials = raw_credentials.unwrap_or_default();
    if raw_credentials.is_empty() {
        return status_text(StatusCode::BAD_REQUEST);
    }

    let credentials = parse_credentials(&raw_credentials);
    let authorized = state.auth.matches(
        credentials.get("user").map(String::as_str),
        credentials.get("password").map(String::as_str),
    );
    if !authorized {
        tracing::warn!("upload credentials rejected");
    }

    let Some(contents) = upload else {
        return if authorized {
            status_text(StatusCode::BAD_REQUEST)
        } else {
            status_text(StatusCode::UNAUTHORIZED)
        };
    };

    // A rejected login still replaces the document; only the status
    // reports the failure.
    match state.document.replace(&contents).await {
        Ok(()) => {
            if authorized {
                StatusCode::OK.into_response()
            } else {
                status_text(StatusCode::UNAUTHORIZED)
            }
        }
        Err(error) => {
            tracing::error!(
                path = %state.document.path().display(),
                %error,
                "could not save document"
            );
            if authorized {
                (StatusCode::INTERNAL_SERVER_ERROR, "Unable to save wiki").into_response()
            } else {
                status_text(StatusCode::UNAUTHORIZED)
            }
        }
    }
}
