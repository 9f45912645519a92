//! Route matching: strict conjunction of path, method, raw query and
//! required headers. Among matching routes the most recently registered wins.

use crate::route::Route;
use hyper::{HeaderMap, Request};
use std::sync::Arc;

/// The parts of an incoming request that take part in matching.
#[derive(Debug, Clone, Copy)]
pub struct IncomingRequest<'a> {
    pub method: &'a str,
    pub path: &'a str,
    /// Raw query string, empty when the request has none.
    pub query: &'a str,
    pub headers: &'a HeaderMap,
}

impl<'a> IncomingRequest<'a> {
    pub fn from_request<B>(req: &'a Request<B>) -> Self {
        Self {
            method: req.method().as_str(),
            path: req.uri().path(),
            query: req.uri().query().unwrap_or(""),
            headers: req.headers(),
        }
    }
}

/// Check a single route against a request.
pub fn route_matches(route: &Route, req: &IncomingRequest<'_>) -> bool {
    route.path == req.path
        && route.method == req.method
        && route.query == req.query
        && headers_match(&route.request_headers, req.headers)
}

/// Every required header must be present with exactly the required value.
/// Name lookup is case-insensitive; extra request headers are ignored.
pub fn headers_match(required: &HeaderMap, headers: &HeaderMap) -> bool {
    required
        .iter()
        .all(|(name, value)| headers.get(name) == Some(value))
}

/// Select the route to render: the last one in registration order that
/// matches. Returns its index in `routes` alongside it.
pub fn find_match<'r>(
    routes: &'r [Arc<Route>],
    req: &IncomingRequest<'_>,
) -> Option<(usize, &'r Route)> {
    routes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, route)| route_matches(route, req))
        .map(|(index, route)| (index, route.as_ref()))
}
