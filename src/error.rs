//! Error types for the collaborators around the engine.
//!
//! Normalization itself cannot fail; these cover reading sources, fetching
//! pages, loading configuration and writing output files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("\"{0}\" is neither a URL, an existing file nor a directory")]
    Unresolvable(String),

    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("output file {0} already exists")]
    OutputExists(PathBuf),

    #[error("no input files found in {0}")]
    NoInputFiles(PathBuf),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
