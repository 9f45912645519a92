//! The `Route` entity and the validation helpers used to build one.

use super::options::StubOption;
use crate::error::ConfigError;
use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, StatusCode, Uri};

/// One registered stub: a request shape plus the canned response for it.
///
/// Header names, header values and the status code are validated when the
/// route is built, so a registered route always renders.
#[derive(Debug, Clone)]
pub struct Route {
    /// HTTP verb, compared case-sensitively.
    pub method: String,
    /// Path component only, compared exactly.
    pub path: String,
    /// Raw query string, compared byte-for-byte. Empty when the URI has none.
    pub query: String,
    /// Headers the request must carry with exactly these values.
    pub request_headers: HeaderMap,
    /// `None` renders as 200.
    pub status: Option<StatusCode>,
    pub body: Bytes,
    pub response_headers: HeaderMap,
}

impl Route {
    /// Build a route for `method` and `uri` with an empty 200 response.
    ///
    /// The URI may be origin-form (`/users?id=1`) or absolute
    /// (`http://api.local/users?id=1`); only the path and raw query take part
    /// in matching.
    pub fn new(method: &str, uri: &str) -> Result<Self, ConfigError> {
        Method::from_bytes(method.as_bytes())
            .map_err(|_| ConfigError::InvalidMethod(method.to_string()))?;

        let parsed: Uri = uri.parse().map_err(|source| ConfigError::InvalidUri {
            uri: uri.to_string(),
            source,
        })?;
        if parsed.path().is_empty() {
            return Err(ConfigError::MissingPath(uri.to_string()));
        }

        Ok(Self {
            method: method.to_string(),
            path: parsed.path().to_string(),
            query: parsed.query().unwrap_or("").to_string(),
            request_headers: HeaderMap::new(),
            status: None,
            body: Bytes::new(),
            response_headers: HeaderMap::new(),
        })
    }

    /// Build a route the way `MockServer::stub` does: `body` is the default
    /// response body and `options` are applied in order, later options
    /// overriding earlier ones on the same field.
    pub fn from_stub<I>(
        method: &str,
        uri: &str,
        body: impl Into<Bytes>,
        options: I,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = StubOption>,
    {
        let mut route = Self::new(method, uri)?;
        route.body = body.into();
        for option in options {
            option.apply(&mut route)?;
        }
        Ok(route)
    }

    /// Status the route renders with.
    pub fn status_or_default(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }
}

/// Convert a numeric status where `0` means "not specified".
pub(crate) fn parse_status(code: u16) -> Result<Option<StatusCode>, ConfigError> {
    if code == 0 {
        return Ok(None);
    }
    StatusCode::from_u16(code)
        .map(Some)
        .map_err(|_| ConfigError::InvalidStatus(code))
}

/// Build a header map from name/value pairs. A repeated name keeps the last
/// value, so every header is set once.
pub(crate) fn parse_headers<I, K, V>(pairs: I) -> Result<HeaderMap, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let name = name.as_ref();
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeaderName(name.to_string()))?;
        let header_value = HeaderValue::from_str(value.as_ref()).map_err(|_| {
            ConfigError::InvalidHeaderValue {
                name: name.to_string(),
            }
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
