//! Configuration loading from disk, CLI, and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{self, ValidationError};
use crate::security::AuthConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

/// Load and validate the server configuration.
///
/// Starts from the optional TOML file (or built-in defaults), applies the
/// `--listen-addr` value, and captures the upload secrets from
/// `AUTH_USER`/`AUTH_PASS`.
pub fn load(path: Option<&Path>, listen_addr: &str) -> Result<ServerConfig, ConfigError> {
    let mut config: ServerConfig = match path {
        Some(p) => toml::from_str(&fs::read_to_string(p)?)?,
        None => ServerConfig::default(),
    };

    config.listener.bind_address = validation::normalize_bind_address(listen_addr)?;
    config.auth = AuthConfig::from_env();

    validation::validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_file_given() {
        let config = load(None, ":5000").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
        assert_eq!(config.document.path.to_str(), Some("wiki.html"));
        assert_eq!(config.timeouts.shutdown_grace_secs, 30);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[document]\npath = \"pages/index.html\"\n\n[upload]\nmax_body_bytes = 1024"
        )
        .unwrap();

        let config = load(Some(file.path()), "127.0.0.1:8080").unwrap();
        assert_eq!(config.document.path.to_str(), Some("pages/index.html"));
        assert_eq!(config.upload.max_body_bytes, 1024);
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn listen_addr_flag_beats_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener]\nbind_address = \"10.0.0.1:9999\"").unwrap();

        let config = load(Some(file.path()), ":5000").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();

        assert!(matches!(
            load(Some(file.path()), ":5000"),
            Err(ConfigError::Parse(_))
        ));
    }
}
