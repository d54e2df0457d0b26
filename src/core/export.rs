//! Export pipeline.
//!
//! Sequences one run: connect to the secret store, fetch, convert, write.
//! The output encoding is resolved up front so a bad path or type never
//! reaches configuration, the network or the filesystem.

use std::path::PathBuf;

use tracing::debug;

use crate::core::domain::{Format, OutputSpec};
use crate::core::format;
use crate::core::source::SecretSource;
use crate::core::writer;
use crate::error::Result;

/// A single secret export request.
#[derive(Debug, Clone)]
pub struct Export {
    secret: String,
    output: OutputSpec,
}

impl Export {
    /// Validate the request.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::UnsupportedType` if the output encoding cannot be
    /// determined from `format` or the path's extension.
    pub fn new(
        secret: impl Into<String>,
        path: impl Into<PathBuf>,
        format: Option<Format>,
    ) -> Result<Self> {
        let output = OutputSpec::resolve(path, format)?;

        Ok(Self {
            secret: secret.into(),
            output,
        })
    }

    /// Secret name or ARN
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Resolved output destination
    pub fn output(&self) -> &OutputSpec {
        &self.output
    }

    /// Run the pipeline.
    ///
    /// `connect` resolves the execution environment and builds the source; it
    /// is called once, before anything else. No step runs after a failure.
    pub fn run<S, C>(&self, connect: C) -> Result<()>
    where
        S: SecretSource,
        C: FnOnce() -> Result<S>,
    {
        let source = connect()?;
        debug!(
            source = source.name(),
            secret = %self.secret,
            format = %self.output.format(),
            "exporting secret"
        );

        let payload = source.fetch(&self.secret)?;
        let rendered = format::render(&payload, self.output.format())?;
        writer::write(self.output.path(), &rendered)
    }
}
