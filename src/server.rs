//! HTTP hosting for the analyzer. The server is an explicit value you build
//! and run — no module-level application global.

use anyhow::{Context, Result};
use axum::Router;
use axum::response::Response;
use axum::routing::post;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::adapter::http::HttpAdapter;
use crate::adapter::{AdapterError, RequestAdapter};
use crate::consts::{DEFAULT_HOST, DEFAULT_PORT};

/// Where to listen. Port 0 asks the OS for an ephemeral port, which is how
/// the integration tests run many servers side by side.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// A bound listener plus the routes it will serve.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind the configured address. Fails early if the address is taken or
    /// unparseable, before any request work starts.
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        Ok(Self { listener })
    }

    /// The address actually bound — the real port when the config asked for 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("failed to read bound address")
    }

    /// Serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        info!("listening on {}", self.local_addr()?);
        axum::serve(self.listener, router())
            .await
            .context("server error")?;
        Ok(())
    }
}

/// The one route this service has.
pub fn router() -> Router {
    Router::new().route("/validate", post(validate))
}

async fn validate(body: String) -> Result<Response, AdapterError> {
    match HttpAdapter.handle(body) {
        Ok(reply) => Ok(reply),
        Err(e) => {
            warn!("rejected request: {e}");
            Err(e)
        }
    }
}
