//! Output format and destination.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, UsageError};

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON
    Json,
    /// YAML derived from the JSON value
    Yaml,
}

impl Format {
    /// Map a file extension (without the leading dot) to a format.
    ///
    /// - `json` → JSON
    /// - `yaml`, `yml` → YAML
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Format name as accepted by `--type`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the rendered secret goes and in which encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    path: PathBuf,
    format: Format,
}

impl OutputSpec {
    /// Resolve the output encoding exactly once.
    ///
    /// An explicit format wins; otherwise the path's extension decides.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::UnsupportedType` if no format can be determined.
    pub fn resolve(path: impl Into<PathBuf>, explicit: Option<Format>) -> Result<Self> {
        let path = path.into();

        let format = match explicit {
            Some(format) => format,
            None => {
                let ext = path.extension().and_then(|e| e.to_str());
                ext.and_then(Format::from_extension).ok_or_else(|| {
                    UsageError::UnsupportedType(ext.map(|e| format!(".{}", e)).unwrap_or_default())
                })?
            }
        };

        Ok(Self { path, format })
    }

    /// Target file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Target encoding
    pub fn format(&self) -> Format {
        self.format
    }
}
