//! Cassette loading: YAML or JSON documents listing request/response pairs.
//!
//! Loading is a pure parse-and-map step from files to [`Route`]s; the caller
//! decides where the routes go. Any failure aborts the whole load so nothing
//! is registered from a half-read cassette set.

mod types;

pub use types::{CassetteEntry, CassetteRequest, CassetteResponse};

use crate::error::ConfigError;
use crate::route::Route;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Document encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CassetteFormat {
    Yaml,
    Json,
}

impl CassetteFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CassetteFormat::Json,
            _ => CassetteFormat::Yaml,
        }
    }
}

/// Load routes from a cassette file, or from every file in a directory.
///
/// Directory entries are read in file name order (subdirectories are
/// skipped), and that order becomes registration order.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Route>, ConfigError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConfigError::CassetteNotFound(path.to_path_buf())
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let routes = if metadata.is_dir() {
        load_dir(path)?
    } else {
        load_file(path)?
    };
    info!("Loaded {} route(s) from {}", routes.len(), path.display());
    Ok(routes)
}

fn load_dir(dir: &Path) -> Result<Vec<Route>, ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry_path = entry.map_err(io_error)?.path();
        if entry_path.is_file() {
            files.push(entry_path);
        } else {
            debug!("Skipping non-file cassette entry {}", entry_path.display());
        }
    }
    files.sort();

    let mut routes = Vec::new();
    for file in &files {
        routes.extend(load_file(file)?);
    }
    Ok(routes)
}

fn load_file(path: &Path) -> Result<Vec<Route>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let routes = parse(&contents, CassetteFormat::from_path(path), path)?;
    debug!("{}: {} route(s)", path.display(), routes.len());
    Ok(routes)
}

/// Parse a cassette document. `origin` is only used in error messages.
///
/// A blank document holds no entries.
pub fn parse(
    contents: &str,
    format: CassetteFormat,
    origin: &Path,
) -> Result<Vec<Route>, ConfigError> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<CassetteEntry> = match format {
        CassetteFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|source| ConfigError::Yaml {
                path: origin.to_path_buf(),
                source,
            })?
        }
        CassetteFormat::Json => {
            serde_json::from_str(contents).map_err(|source| ConfigError::Json {
                path: origin.to_path_buf(),
                source,
            })?
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.into_route().map_err(|source| ConfigError::Entry {
                path: origin.to_path_buf(),
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
