//! HTTP API over the ProjectDesk core services.
//!
//! # Responsibility
//! - Route REST requests to project/task/facility use-cases.
//! - Resolve configuration and the database connection string at startup.
//!
//! # Invariants
//! - Handlers never hold the connection lock across an `.await`.
//! - Every JSON body uses the `ApiResponse` envelope, except `/health`.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use config::{ApiConfig, ConfigError, EnvSecretStore, FileSecretStore, SecretStore};
pub use error::{ApiError, ApiResponse};
pub use routes::router;
pub use state::AppState;

use log::info;
use std::net::SocketAddr;

/// Binds `addr` and serves the API until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "event=server_start module=api status=ok addr={}",
        listener.local_addr()?
    );
    axum::serve(listener, router(state)).await
}
