//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags + optional TOML file + environment secrets
//!     → loader.rs (parse & merge)
//!     → validation.rs (normalize bind address, semantic checks)
//!     → ServerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Upload secrets come from the environment only, never the file

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::{DocumentConfig, ListenerConfig, ServerConfig, TimeoutConfig, UploadConfig};
