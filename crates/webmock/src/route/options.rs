//! Stub options: ordered mutators applied to a route at registration time.

use super::types::{parse_headers, parse_status, Route};
use crate::error::ConfigError;
use bytes::Bytes;
use hyper::HeaderMap;

/// A configuration step for `MockServer::stub`.
///
/// Options run in the order given. Each one only touches the fields it
/// specifies, so a later option overrides an earlier one on shared fields
/// and leaves the rest alone.
#[derive(Debug, Clone)]
pub enum StubOption {
    /// Require request headers, parsed from a `"Name: value; Other: value"` spec.
    Headers(String),
    /// Override the response. A `0` status, empty body or empty header list
    /// leaves that part of the route unchanged.
    Response {
        status: u16,
        body: Bytes,
        headers: Vec<(String, String)>,
    },
}

impl StubOption {
    /// Match only requests carrying these headers, e.g.
    /// `StubOption::headers("Accept: application/json; X-Api-Key: secret")`.
    pub fn headers(spec: impl Into<String>) -> Self {
        StubOption::Headers(spec.into())
    }

    /// Full response override.
    pub fn response<I, K, V>(status: u16, body: impl Into<Bytes>, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        StubOption::Response {
            status,
            body: body.into(),
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Only override the status code.
    pub fn status(status: u16) -> Self {
        StubOption::Response {
            status,
            body: Bytes::new(),
            headers: Vec::new(),
        }
    }

    pub(crate) fn apply(&self, route: &mut Route) -> Result<(), ConfigError> {
        match self {
            StubOption::Headers(spec) => {
                route.request_headers = parse_header_spec(spec)?;
            }
            StubOption::Response {
                status,
                body,
                headers,
            } => {
                if let Some(status) = parse_status(*status)? {
                    route.status = Some(status);
                }
                if !body.is_empty() {
                    route.body = body.clone();
                }
                if !headers.is_empty() {
                    route.response_headers =
                        parse_headers(headers.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
                }
            }
        }
        Ok(())
    }
}

/// Parse a semicolon-separated `name: value` list into a header map.
///
/// Entries split on the first `:` so values may contain colons. Blank
/// entries are skipped.
pub fn parse_header_spec(spec: &str) -> Result<HeaderMap, ConfigError> {
    let mut pairs = Vec::new();
    for entry in spec.split(';') {
        if entry.trim().is_empty() {
            continue;
        }
        let (name, value) = entry
            .split_once(':')
            .ok_or_else(|| ConfigError::InvalidHeaderSpec(entry.trim().to_string()))?;
        pairs.push((name.trim(), value.trim()));
    }
    parse_headers(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    fn route() -> Route {
        Route::from_stub("GET", "/users", "default", []).unwrap()
    }

    #[test]
    fn test_parse_header_spec_trims_and_splits() {
        let headers =
            parse_header_spec(" Accept-Encoding: gzip,deflate ;X-Trace-Id:abc ").unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["accept-encoding"], "gzip,deflate");
        assert_eq!(headers["x-trace-id"], "abc");
    }

    #[test]
    fn test_parse_header_spec_keeps_colons_in_value() {
        let headers = parse_header_spec("Referer: http://localhost:8080/a").unwrap();
        assert_eq!(headers["referer"], "http://localhost:8080/a");
    }

    #[test]
    fn test_parse_header_spec_skips_blank_entries() {
        let headers = parse_header_spec("Accept: */*;").unwrap();
        assert_eq!(headers.len(), 1);
        assert!(parse_header_spec("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_header_spec_rejects_missing_colon() {
        let err = parse_header_spec("Accept: */*; Broken").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeaderSpec(ref s) if s == "Broken"));
    }

    #[test]
    fn test_parse_header_spec_rejects_bad_name() {
        let err = parse_header_spec("Bad Name: x").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeaderName(_)));
    }

    #[test]
    fn test_response_option_overrides_all_parts() {
        let mut route = route();
        StubOption::response(201, "created", [("Location", "/users/7")])
            .apply(&mut route)
            .unwrap();
        assert_eq!(route.status, Some(StatusCode::CREATED));
        assert_eq!(route.body, "created");
        assert_eq!(route.response_headers["location"], "/users/7");
    }

    #[test]
    fn test_response_option_leaves_unspecified_parts() {
        let mut route = route();
        StubOption::response(0, "", Vec::<(String, String)>::new())
            .apply(&mut route)
            .unwrap();
        assert_eq!(route.status, None);
        assert_eq!(route.body, "default");
        assert!(route.response_headers.is_empty());
    }

    #[test]
    fn test_response_option_rejects_invalid_status() {
        let mut route = route();
        let err = StubOption::status(42).apply(&mut route).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStatus(42)));
    }

    #[test]
    fn test_later_options_override_earlier_ones() {
        let route = Route::from_stub(
            "GET",
            "/users",
            "default",
            [
                StubOption::headers("Accept: text/plain"),
                StubOption::response(500, "first", [("X-Source", "first")]),
                StubOption::status(503),
                StubOption::headers("Accept: application/json"),
            ],
        )
        .unwrap();

        assert_eq!(route.request_headers.len(), 1);
        assert_eq!(route.request_headers["accept"], "application/json");
        assert_eq!(route.status, Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(route.body, "first");
        assert_eq!(route.response_headers["x-source"], "first");
    }
}
