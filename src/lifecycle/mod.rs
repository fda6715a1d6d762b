//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Bind listener → Raise health flag → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGINT → Lower health flag → Stop accepting → Drain in-flight
//!     → Exit cleanly, or exit non-zero when the drain deadline expires
//! ```
//!
//! # Design Decisions
//! - Bind failure is fatal; there is no retry or degraded mode
//! - The drain deadline bounds waiting only, it cancels nothing

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
