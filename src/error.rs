//! Error types.
//!
//! Every failure family maps to exactly one process exit code, see
//! [`Error::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

use crate::core::constants::{EX_CONFIG, EX_DATAERR, EX_IOERR, EX_USAGE};

/// Top-level error for a single export run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

impl Error {
    /// Process exit code for this error (sysexits.h values).
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => EX_CONFIG,
            Error::Fetch(_) | Error::Usage(_) => EX_USAGE,
            Error::Data(_) => EX_DATAERR,
            Error::Write(_) => EX_IOERR,
        }
    }
}

/// Execution environment could not be resolved.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("aws: failed to load config, {0}")]
    Load(String),

    #[error("aws: failed to load region from instance metadata, {0}")]
    Metadata(String),

    #[error("aws: region not found")]
    RegionNotFound,
}

/// Remote secret lookup failed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport, authorization or not-found error from the service, verbatim.
    #[error("{0}")]
    Request(String),

    #[error("secret {0} has no string value")]
    NoStringValue(String),
}

/// Caller input problem detected before any I/O.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}

/// Payload is not well-formed structured text.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("json: problem formatting, {0}")]
    Json(#[source] serde_json::Error),

    #[error("yaml: failed to convert from json, {0}")]
    Yaml(String),
}

/// Output file could not be created or written.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("open {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
