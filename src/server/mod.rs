//! Fitness WebApp API server
//!
//! A single welcome endpoint served with axum:
//!
//! - `GET /` returns `{"message": "Welcome to the Fitness WebApp API"}`
//! - Unknown paths return 404 `{"detail": "Not Found"}`
//! - Other methods on `/` return 405 `{"detail": "Method Not Allowed"}`
//! - Every request is logged with its status and latency
//!
//! The server blocks until Ctrl+C is received.

mod routes;

pub use routes::{router, AppInfo, ErrorDetail, WelcomeMessage, APP_TITLE, WELCOME_MESSAGE};

use crate::error::ServerError;
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

/// Default listen address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Where the server listens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface address
    pub host: IpAddr,
    /// TCP port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Socket address to bind
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Bind the configured address and serve until Ctrl+C
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::bind(addr, e))?;

    serve(listener, AppInfo::default(), shutdown_signal()).await
}

/// Serve the API on an already-bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, info: AppInfo, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("{} listening on http://{}", info.title, addr);
    }

    axum::serve(listener, router(info))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|source| ServerError::Serve { source })?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down..."),
        Err(e) => {
            // Without a signal handler the server runs until killed
            tracing::warn!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
