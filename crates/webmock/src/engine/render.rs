//! Turning a selected route (or the lack of one) into an HTTP response.

use crate::route::Route;
use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};

/// Render a matched route: its status (200 when unset), each response header
/// once, and the body verbatim.
pub fn render_route(route: &Route) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(route.body.clone()));
    *response.status_mut() = route.status_or_default();
    response
        .headers_mut()
        .extend(route.response_headers.clone());
    response
}

/// The outcome for a request no route matched: 404 with an empty body.
pub fn not_found() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

pub fn render(route: Option<&Route>) -> Response<Full<Bytes>> {
    route.map_or_else(not_found, render_route)
}
