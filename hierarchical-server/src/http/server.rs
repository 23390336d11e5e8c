//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C, bounded by a grace period

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::SyllabusStore;
use crate::service::SyllabusService;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// How long in-flight requests may run after a shutdown signal
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            shutdown_grace: Duration::from_secs(10),
        }
    }
}

/// Shared application state
pub struct AppState<S> {
    pub service: SyllabusService<S>,
}

/// Build the application router with all routes.
pub fn build_router<S: SyllabusStore>(service: SyllabusService<S>) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::syllabuses::router::<S>())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { service }))
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&db_config).await?;
/// let service = SyllabusService::new(SyllabusRepo::new(pool));
/// run_server(service, ServerConfig::default()).await?;
/// ```
pub async fn run_server<S: SyllabusStore>(
    service: SyllabusService<S>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    serve_with_shutdown(listener, service, config.shutdown_grace, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// After `shutdown` resolves, in-flight requests get `grace` to finish;
/// whatever is still running after that is dropped.
pub async fn serve_with_shutdown<S, F>(
    listener: TcpListener,
    service: SyllabusService<S>,
    grace: Duration,
    shutdown: F,
) -> Result<(), ServerError>
where
    S: SyllabusStore,
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(service);
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    let grace_expired = async {
        match signalled_rx.await {
            Ok(()) => tokio::time::sleep(grace).await,
            // Server ended on its own; let the other branch report it
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = &mut server => result?,
        _ = grace_expired => {
            tracing::warn!(
                grace_secs = grace.as_secs(),
                "Shutdown grace period elapsed, dropping in-flight requests"
            );
        }
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
