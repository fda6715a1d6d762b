//! Process readiness flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to the process-wide readiness flag.
///
/// Starts lowered; the server lifecycle raises it once the listener is
/// serving and lowers it again the moment shutdown begins, so health
/// probes fail ahead of connection draining.
#[derive(Debug, Clone, Default)]
pub struct HealthFlag {
    serving: Arc<AtomicBool>,
}

impl HealthFlag {
    /// Create a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise or lower the flag.
    pub fn set_serving(&self, serving: bool) {
        self.serving.store(serving, Ordering::SeqCst);
    }

    /// Whether the server is currently accepting work.
    pub fn is_serving(&self) -> bool {
        self.serving.load(Ordering::SeqCst)
    }
}
