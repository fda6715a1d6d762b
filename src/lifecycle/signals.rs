//! OS signal handling.
//!
//! Only the interrupt signal (SIGINT / Ctrl+C) is handled, and it means
//! one thing: begin graceful shutdown. There is no reload signal.

/// Block until the process receives an interrupt.
///
/// Runs on its own task so request handling is never involved in signal
/// delivery.
pub async fn interrupt() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install interrupt handler");
    tracing::info!("interrupt received, shutting down");
}
