//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware order, graceful shutdown)
//!     → response.rs (build-info header on the way out)
//!     → request.rs (echo or generate X-Request-Id)
//!     → middleware/access_log.rs (one log line per request)
//!     → handlers.rs (document GET/POST, healthz, 404 catch-all)
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
