//! `taleweaver serve` -- run the HTTP relay until Ctrl+C or SIGTERM.

use anyhow::Result;
use console::style;

use crate::http::router::build_router;
use crate::state::AppState;

pub async fn serve(state: AppState, quiet: bool) -> Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        %addr,
        model = %state.config.backend.model,
        backend = %state.config.backend.base_url,
        "Server listening"
    );

    if !quiet {
        println!();
        println!(
            "  {} Taleweaver listening on {}",
            style("⚡").bold(),
            style(format!("http://{addr}")).cyan()
        );
        println!(
            "  {} {} via {}",
            style("🎲").bold(),
            style(&state.config.backend.model).bold(),
            style(&state.config.backend.base_url).dim()
        );
        println!("  {}", style("Press Ctrl+C to stop").dim());
        println!();
    }

    let router = build_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
