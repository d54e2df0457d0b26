//! Constants used throughout smexp.
//!
//! Centralizes exit codes, build identifiers and timing values.

use std::time::Duration;

/// Successful termination.
pub const EX_OK: i32 = 0;

/// Command line usage error.
pub const EX_USAGE: i32 = 64;

/// Data format error.
pub const EX_DATAERR: i32 = 65;

/// Input/output error.
pub const EX_IOERR: i32 = 74;

/// Configuration error.
pub const EX_CONFIG: i32 = 78;

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit the binary was built from, baked in via `SMEXP_GIT_HASH`.
pub const GIT_HASH: &str = match option_env!("SMEXP_GIT_HASH") {
    Some(hash) => hash,
    None => "undefined",
};

/// Build timestamp, baked in via `SMEXP_BUILD_TIME`.
pub const BUILD_TIME: &str = match option_env!("SMEXP_BUILD_TIME") {
    Some(time) => time,
    None => "undefined",
};

/// Upper bound on the instance metadata region lookup.
pub const METADATA_TIMEOUT: Duration = Duration::from_secs(5);

/// Instance metadata path that answers with the current region.
pub const METADATA_REGION_PATH: &str = "/latest/meta-data/placement/region";

/// Permissions for the written output file (rw-r--r--).
pub const OUTPUT_MODE: u32 = 0o644;

/// Indentation used for pretty-printed JSON.
pub const JSON_INDENT: &[u8] = b"    ";

/// Log filter environment variable.
pub const LOG_ENV: &str = "SMEXP_LOG";
