//! Core library components.
//!
//! Environment resolution, secret retrieval, format conversion and output
//! persistence, sequenced by [`export::Export`].

pub mod constants;
pub mod domain;
pub mod environment;
pub mod export;
pub mod format;
pub mod source;
pub mod writer;
