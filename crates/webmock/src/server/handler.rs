//! Connection and request handling for the stub server.

use crate::engine::{self, IncomingRequest};
use crate::route::Registry;
use bytes::Bytes;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Answer one request from the current registry snapshot.
///
/// The request body is never read; stubs do not look at it.
pub async fn handle_stub_request<B>(
    req: Request<B>,
    registry: Arc<Registry>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let routes = registry.snapshot();
    Ok(engine::respond(&routes, &IncomingRequest::from_request(&req)))
}

/// Accept connections until shutdown is signalled (or the sender is dropped).
pub(crate) async fn accept_loop(
    listener: TcpListener,
    registry: Arc<Registry>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let local_addr = listener.local_addr().ok();
    // Never polled here, so every clone observes the shutdown signal.
    let conn_shutdown_rx = shutdown_rx.clone();
    loop {
        tokio::select! {
            result = listener.accept() => {
                match result {
                    Ok((stream, peer)) => {
                        tokio::spawn(serve_connection(
                            stream,
                            peer,
                            Arc::clone(&registry),
                            conn_shutdown_rx.clone(),
                        ));
                    }
                    Err(e) => {
                        error!("Accept error on {:?}: {}", local_addr, e);
                    }
                }
            }
            _ = shutdown_rx.changed() => {
                break;
            }
        }
    }
    info!("Stub server on {:?} stopped accepting", local_addr);
}

async fn serve_connection(
    stream: TcpStream,
    peer: SocketAddr,
    registry: Arc<Registry>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let io = TokioIo::new(stream);
    let service = service_fn(move |req| handle_stub_request(req, Arc::clone(&registry)));
    let conn = http1::Builder::new().serve_connection(io, service);
    tokio::pin!(conn);

    // Idle keep-alive connections close at once on shutdown; in-flight
    // requests finish first.
    let mut shutting_down = false;
    loop {
        tokio::select! {
            result = conn.as_mut() => {
                if let Err(e) = result {
                    debug!("Connection error from {}: {}", peer, e);
                }
                break;
            }
            _ = shutdown_rx.changed(), if !shutting_down => {
                shutting_down = true;
                conn.as_mut().graceful_shutdown();
            }
        }
    }
}
