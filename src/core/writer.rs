//! Output file persistence.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, WriteError};

/// Create or truncate `path` and write `bytes` in a single call.
///
/// New files get `rw-r--r--` permissions (subject to umask). Existing
/// files keep their permissions.
///
/// # Errors
///
/// Returns a `WriteError` if the file cannot be opened or written.
pub fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.create(true).truncate(true).write(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(crate::core::constants::OUTPUT_MODE);
    }

    let mut file = options.open(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(bytes)
        .and_then(|()| file.flush())
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), len = bytes.len(), "wrote output file");
    Ok(())
}
