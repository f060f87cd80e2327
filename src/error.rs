//! Error types for the site tooling.
//!
//! Loading the publication data can fail in several distinct ways, which
//! `LoadError` keeps apart so the log line says what went wrong. Readers of
//! the page only ever see one outcome: the fixed error message in the
//! publication container.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the publication list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The HTTP request itself failed (connection refused, DNS, TLS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with a success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The local data file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body was not a JSON array of publications.
    #[error("malformed publication data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from building or serving the site.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("publication data unavailable: {0}")]
    Load(#[from] LoadError),

    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("cannot scan {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("server error: {0}")]
    Server(std::io::Error),
}

impl SiteError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
