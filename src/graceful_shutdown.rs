use tokio::signal;
use tracing::warn;

/// Resolves once the process receives Ctrl+C or, on unix, SIGTERM.
/// Raced against the HTTP server future in `main` so in-flight
/// requests finish before the process exits.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())
            .expect("Failed to listen for SIGTERM");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("🛑 Ctrl+C received, shutting down the portfolio API...")
        },
        _ = terminate => {
            warn!("🛑 SIGTERM received, shutting down the portfolio API...");
        }
    }
}
