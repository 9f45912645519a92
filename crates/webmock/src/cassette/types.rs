//! Cassette document schema.

use crate::error::ConfigError;
use crate::route::{parse_headers, parse_status, Route};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One request/response pair in a cassette document.
///
/// ```yaml
/// - request:
///     method: get
///     path: /users?page=2
///     headers:
///       Accept: application/json
///   response:
///     status: 200
///     headers:
///       Content-Type: application/json
///     body: '[{"id": 1}]'
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CassetteEntry {
    pub request: CassetteRequest,
    #[serde(default)]
    pub response: CassetteResponse,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CassetteRequest {
    pub method: String,
    /// Path with an optional query string, taken verbatim.
    pub path: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CassetteResponse {
    /// `0` or missing renders as 200.
    #[serde(default)]
    pub status: u16,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl CassetteEntry {
    /// Map the entry onto a route. The method is upper-cased; everything else
    /// is copied as written.
    pub fn into_route(self) -> Result<Route, ConfigError> {
        let mut route = Route::new(&self.request.method.to_uppercase(), &self.request.path)?;
        route.request_headers = parse_headers(&self.request.headers)?;
        route.status = parse_status(self.response.status)?;
        route.response_headers = parse_headers(&self.response.headers)?;
        route.body = self.response.body.into();
        Ok(route)
    }
}
