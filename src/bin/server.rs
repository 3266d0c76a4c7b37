//! HTTP server entry point.
//!
//! Initializes logging and the repository singleton, then serves the REST
//! API.
//!
//! ```bash
//! cargo run --bin routinely-server --features "local-repo,http-server"
//! ```
//!
//! Environment variables:
//! - `HOST` / `PORT`: bind address (default 0.0.0.0:8080)
//! - `REPOSITORY_TYPE`: storage backend (default: local)
//! - `RUST_LOG`: log filter (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use routinely::db;
use routinely::http::{create_router, AppState};

fn bind_addr() -> anyhow::Result<SocketAddr> {
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    Ok(format!("{}:{}", host, port).parse()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("starting routinely server");

    db::init_repository()?;
    let repository = Arc::clone(db::get_repository()?);
    info!("repository initialized");

    let app = create_router(AppState::new(repository));

    let addr = bind_addr()?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
