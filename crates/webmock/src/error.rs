//! Error types for stub setup and server lifecycle.
//!
//! Every variant of [`ConfigError`] is an authoring mistake detected before the
//! server serves the affected route. A request that matches no route is not an
//! error at all; it renders as 404.

use std::path::PathBuf;

/// Errors raised while building routes from stub calls or cassette files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid URI '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: hyper::http::uri::InvalidUri,
    },
    #[error("URI '{0}' has no path component")]
    MissingPath(String),
    #[error("Invalid HTTP method '{0}'")]
    InvalidMethod(String),
    #[error("Invalid header spec '{0}': expected 'name: value'")]
    InvalidHeaderSpec(String),
    #[error("Invalid header name '{0}'")]
    InvalidHeaderName(String),
    #[error("Invalid value for header '{name}'")]
    InvalidHeaderValue { name: String },
    #[error("Invalid status code {0}")]
    InvalidStatus(u16),
    #[error("Cassette path not found: {}", .0.display())]
    CassetteNotFound(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid entry #{index} in {}: {source}", path.display())]
    Entry {
        path: PathBuf,
        index: usize,
        #[source]
        source: Box<ConfigError>,
    },
}

/// Errors raised while starting the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
