//! Document storage subsystem.
//!
//! One file on local disk is the entire data model: GET re-reads it on
//! every request, an accepted POST overwrites it wholesale. At most one
//! version exists at any time.

pub mod store;

pub use store::DocumentStore;
