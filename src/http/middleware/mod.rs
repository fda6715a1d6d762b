//! Request middleware applied around the router.

pub mod access_log;
