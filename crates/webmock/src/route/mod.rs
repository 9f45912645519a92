//! Route model and registry.
//!
//! - `types`: the `Route` entity and its validation helpers
//! - `options`: `StubOption`, the ordered mutators applied by `stub`
//! - `registry`: `Registry`, the snapshot-published route list

mod options;
mod registry;
mod types;

pub use options::{parse_header_spec, StubOption};
pub use registry::{Registry, Snapshot};
pub use types::Route;

pub(crate) use types::{parse_headers, parse_status};
