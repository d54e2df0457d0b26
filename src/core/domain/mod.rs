//! Domain types.

mod output;
mod payload;

pub use output::{Format, OutputSpec};
pub use payload::SecretPayload;
