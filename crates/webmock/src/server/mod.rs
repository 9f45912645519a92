//! `MockServer`: a listening stub server owning one route registry.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use webmock::{MockServer, StubOption};
//!
//! let server = MockServer::start().await?;
//! server.stub("GET", "/users?page=2", "[]", [StubOption::headers("Accept: application/json")])?;
//! // point the code under test at server.url()
//! server.stop().await;
//! # Ok(())
//! # }
//! ```

mod handler;

pub use handler::handle_stub_request;

use crate::cassette;
use crate::config::ServerConfig;
use crate::error::{ConfigError, ServerError};
use crate::route::{Registry, Route, StubOption};
use bytes::Bytes;
use handler::accept_loop;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub struct MockServer {
    addr: SocketAddr,
    registry: Arc<Registry>,
    shutdown_tx: watch::Sender<bool>,
    accept_task: Option<JoinHandle<()>>,
}

impl MockServer {
    /// Start on `127.0.0.1` with an OS-assigned port.
    pub async fn start() -> Result<Self, ServerError> {
        Self::start_with(ServerConfig::default()).await
    }

    /// Bind `config` and start accepting connections on the current tokio runtime.
    pub async fn start_with(config: ServerConfig) -> Result<Self, ServerError> {
        let bind_addr = config.socket_addr();
        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr,
                source,
            })?;
        let addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind {
                addr: bind_addr,
                source,
            })?;

        let registry = Arc::new(Registry::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let accept_task = tokio::spawn(accept_loop(listener, Arc::clone(&registry), shutdown_rx));

        info!("Stub server listening on {}", addr);
        Ok(Self {
            addr,
            registry,
            shutdown_tx,
            accept_task: Some(accept_task),
        })
    }

    /// Register a stub: requests for `method` and `uri` get `body` with status
    /// 200, adjusted by `options` in order.
    ///
    /// Nothing is registered when the URI or an option is invalid.
    pub fn stub<I>(
        &self,
        method: &str,
        uri: &str,
        body: impl Into<Bytes>,
        options: I,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = StubOption>,
    {
        let route = Route::from_stub(method, uri, body, options)?;
        debug!("Stub {} {} ?{}", route.method, route.path, route.query);
        self.registry.register(route);
        Ok(())
    }

    /// Register every route in a cassette file or directory, after the ones
    /// already present. Returns how many routes were added.
    pub fn load_cassette(&self, path: impl AsRef<Path>) -> Result<usize, ConfigError> {
        let routes = cassette::load(path)?;
        Ok(self.registry.extend(routes))
    }

    /// Forget every registered route.
    pub fn reset(&self) {
        self.registry.reset();
    }

    /// Base URL, e.g. `http://127.0.0.1:49731`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Stop accepting, close idle connections and release the port.
    pub async fn stop(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.accept_task.take() {
            let _ = task.await;
        }
        info!("Stub server on {} stopped", self.addr);
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}
