//! wikid — a single-document wiki server.
//!
//! Serves one HTML document from local disk and accepts authenticated
//! multipart uploads that replace it wholesale.
//!
//! # Request Flow
//! ```text
//! Client request
//!     → build-info header layer (X-License)
//!     → request ID layer (echo or generate X-Request-Id)
//!     → access log middleware (one line per request)
//!     → timeout + body limit
//!     → router
//!         "/"        → document handler (GET serves, POST replaces)
//!         "/healthz" → health handler
//!         other      → 404
//! ```

pub mod config;
pub mod document;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod security;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
