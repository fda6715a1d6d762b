//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Upload request:
//!     "UploadPlugin" form field ("user=...;password=...")
//!         → credentials.rs (parse into a key/value map)
//!         → AuthConfig (exact-equality check against env secrets)
//!         → handler decides 401 vs accepted
//! ```

pub mod credentials;

pub use credentials::{parse_credentials, AuthConfig};
