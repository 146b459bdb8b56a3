//! Signal handling.

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers shutdown on Ctrl+C.
pub fn trigger_on_ctrl_c(shutdown: Shutdown) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Ctrl+C received");
                shutdown.trigger();
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            }
        }
    });
}
