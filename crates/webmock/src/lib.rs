//! Embeddable HTTP stub server for test suites.
//!
//! Register request shapes and the responses to return for them, then point
//! the code under test at [`MockServer::url`]. Requests match on exact path,
//! case-sensitive method, the literal raw query string and a subset of
//! headers; when several stubs match, the most recently registered one wins.
//! Unmatched requests get an empty 404.

pub mod cassette;
pub mod config;
pub mod engine;
pub mod error;
pub mod route;
pub mod server;

pub use config::ServerConfig;
pub use error::{ConfigError, ServerError};
pub use route::{Registry, Route, StubOption};
pub use server::MockServer;
