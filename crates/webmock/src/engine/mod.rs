//! Matching and rendering engine.
//!
//! Given a snapshot of the registry and an incoming request, picks the route
//! to answer with and renders it. A request no route matches is answered with
//! 404; that is a normal outcome, not an error.

mod matcher;
mod render;


pub use matcher::{find_match, headers_match, route_matches, IncomingRequest};
pub use render::{not_found, render, render_route};

use crate::route::Route;
use bytes::Bytes;
use http_body_util::Full;
use hyper::Response;
use std::sync::Arc;
use tracing::debug;

/// Match `req` against `routes` and render the result.
pub fn respond(routes: &[Arc<Route>], req: &IncomingRequest<'_>) -> Response<Full<Bytes>> {
    let matched = find_match(routes, req);
    match matched {
        Some((index, route)) => debug!(
            "{} {}?{} matched route #{} ({} registered)",
            req.method,
            req.path,
            req.query,
            index,
            routes.len()
        ),
        None => debug!(
            "{} {}?{} matched no route ({} registered)",
            req.method,
            req.path,
            req.query,
            routes.len()
        ),
    }
    render(matched.map(|(_, route)| route))
}
