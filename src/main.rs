//! Camera Dashboard
//!
//! Serves the Dioxus dashboard and the `/backend/` pass-through proxy.

#[cfg(feature = "server")]
use camera_dashboard::{app::App, config, proxy};

#[cfg(feature = "server")]
use std::net::SocketAddr;
#[cfg(feature = "server")]
use tokio::signal;
#[cfg(feature = "server")]
use tower_http::{cors::CorsLayer, trace::TraceLayer};
#[cfg(feature = "server")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "camera_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Camera Dashboard v{} ({})",
        env!("DASHBOARD_VERSION"),
        env!("DASHBOARD_GIT_SHA")
    );

    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, port: {}, backend: {}",
        config.port,
        config.backend_url
    );

    let proxy_state = proxy::ProxyState::new(&config.backend_url)?;

    let app = dioxus::server::router(App)
        .merge(proxy::router(proxy_state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(camera_dashboard::app::App);
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
