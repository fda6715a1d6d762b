//! Semantic validation of the loaded configuration.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A check the schema itself cannot express.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address {addr:?}: {source}")]
    BindAddress {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("upload.max_body_bytes must be non-zero")]
    ZeroBodyLimit,

    #[error("timeouts.{0} must be non-zero")]
    ZeroTimeout(&'static str),
}

/// Normalize a listen address, accepting the bare `:PORT` shorthand for
/// all-interfaces binds.
pub fn normalize_bind_address(addr: &str) -> Result<String, ValidationError> {
    let full = if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_owned()
    };
    full.parse::<SocketAddr>()
        .map_err(|source| ValidationError::BindAddress {
            addr: addr.to_owned(),
            source,
        })?;
    Ok(full)
}

/// Validate a loaded configuration.
pub fn validate(config: &ServerConfig) -> Result<(), ValidationError> {
    config
        .listener
        .bind_address
        .parse::<SocketAddr>()
        .map_err(|source| ValidationError::BindAddress {
            addr: config.listener.bind_address.clone(),
            source,
        })?;

    if config.upload.max_body_bytes == 0 {
        return Err(ValidationError::ZeroBodyLimit);
    }

    let timeouts = [
        ("read_secs", config.timeouts.read_secs),
        ("write_secs", config.timeouts.write_secs),
        ("idle_secs", config.timeouts.idle_secs),
        ("shutdown_grace_secs", config.timeouts.shutdown_grace_secs),
    ];
    for (field, value) in timeouts {
        if value == 0 {
            return Err(ValidationError::ZeroTimeout(field));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_port_shorthand_normalizes() {
        assert_eq!(normalize_bind_address(":5000").unwrap(), "0.0.0.0:5000");
    }

    #[test]
    fn full_address_passes_through() {
        assert_eq!(
            normalize_bind_address("127.0.0.1:8080").unwrap(),
            "127.0.0.1:8080"
        );
    }

    #[test]
    fn garbage_address_is_rejected() {
        assert!(normalize_bind_address("not-an-address").is_err());
        assert!(normalize_bind_address(":not-a-port").is_err());
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let mut config = ServerConfig::default();
        config.upload.max_body_bytes = 0;
        assert!(matches!(
            validate(&config),
            Err(ValidationError::ZeroBodyLimit)
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = ServerConfig::default();
        config.timeouts.write_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ValidationError::ZeroTimeout("write_secs"))
        ));
    }

    #[test]
    fn default_config_validates() {
        assert!(validate(&ServerConfig::default()).is_ok());
    }
}
