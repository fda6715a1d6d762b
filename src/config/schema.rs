//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from an optional
//! TOML file. Every field has a working default, so the server runs with
//! no file at all.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::security::AuthConfig;

/// Root configuration for the wiki server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Document storage settings.
    pub document: DocumentConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Upload limits.
    pub upload: UploadConfig,

    /// Upload credentials. Sourced from `AUTH_USER`/`AUTH_PASS` at load
    /// time, never from the file, so secrets do not live on disk next to
    /// the config.
    #[serde(skip)]
    pub auth: AuthConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Document storage settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Path of the served document. Relative paths resolve against the
    /// working directory.
    pub path: PathBuf,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("wiki.html"),
        }
    }
}

/// Timeout configuration for connections and shutdown.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Time allowed to read an incoming request, in seconds.
    pub read_secs: u64,

    /// Deadline for producing and writing a response, in seconds.
    pub write_secs: u64,

    /// Idle keep-alive connection timeout in seconds.
    pub idle_secs: u64,

    /// Grace period for draining in-flight requests on shutdown, in
    /// seconds. When it expires the process exits non-zero.
    pub shutdown_grace_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            read_secs: 5,
            write_secs: 10,
            idle_secs: 15,
            shutdown_grace_secs: 30,
        }
    }
}

/// Upload limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 32 * 1024 * 1024,
        }
    }
}
