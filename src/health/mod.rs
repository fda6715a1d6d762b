//! Health reporting subsystem.
//!
//! # Data Flow
//! ```text
//! Server lifecycle:
//!     listener bound  → HealthFlag raised
//!     interrupt seen  → HealthFlag lowered (before draining starts)
//!
//! /healthz handler:
//!     HealthFlag set   → 204 No Content
//!     HealthFlag clear → 503 Service Unavailable
//! ```
//!
//! # Design Decisions
//! - The flag is a cloneable handle injected through handler state, not
//!   a process global
//! - Only the lifecycle mutates it; the handler is read-only

pub mod state;

pub use state::HealthFlag;
