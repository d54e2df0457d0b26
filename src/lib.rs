//! smexp - Retrieve a secret from AWS Secrets Manager and save it to a file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   └── version       # Build banner
//! └── core/             # Core library components
//!     ├── constants     # Exit codes, build identifiers, timeouts
//!     ├── domain/       # SecretPayload, OutputSpec, Format
//!     ├── environment   # Credentials + region, metadata fallback
//!     ├── source        # SecretSource trait, AWS Secrets Manager
//!     ├── format        # JSON pretty-print, JSON → YAML
//!     ├── writer        # Output file
//!     └── export        # Pipeline orchestration
//! ```
//!
//! # Exit codes
//!
//! | code | meaning                                             |
//! |------|-----------------------------------------------------|
//! | 0    | success                                             |
//! | 64   | usage error, unsupported type, secret fetch failure |
//! | 65   | secret is not well-formed JSON                      |
//! | 74   | output file could not be written                    |
//! | 78   | credentials or region could not be resolved         |

pub mod cli;
pub mod core;
pub mod error;
