//! Structured text conversion.
//!
//! The secret's canonical form is JSON. Pretty-printed JSON keeps every token
//! of the secret as stored and only changes whitespace. YAML output is always
//! produced by decoding the JSON into a generic value and re-encoding it, so
//! both outputs describe the same structure.

use serde::de::IgnoredAny;
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::JSON_INDENT;
use crate::core::domain::{Format, SecretPayload};
use crate::error::{DataError, Result};

/// Rendered output bytes, wiped on drop.
///
/// Only the final buffer is wiped. The generic value decoded on the YAML
/// path and the encoder's own working buffers are not.
pub type Rendered = Zeroizing<Vec<u8>>;

/// Render a payload in the requested format.
pub fn render(payload: &SecretPayload, format: Format) -> Result<Rendered> {
    match format {
        Format::Json => to_json(payload),
        Format::Yaml => to_yaml(payload),
    }
}

/// Pretty-print a JSON payload with 4-space indentation.
///
/// Strings, numbers and literals are copied verbatim; insignificant
/// whitespace is replaced. Empty objects and arrays stay on one line.
///
/// # Errors
///
/// Returns `DataError::Json` if the payload is not well-formed JSON.
pub fn to_json(payload: &SecretPayload) -> Result<Rendered> {
    let src = payload.as_bytes();
    serde_json::from_slice::<IgnoredAny>(src).map_err(DataError::Json)?;

    // Sized up front so the buffer never reallocates.
    let mut len = 0;
    reindent(src, &mut |chunk| len += chunk.len());

    let mut out = Zeroizing::new(Vec::with_capacity(len));
    reindent(src, &mut |chunk| out.extend_from_slice(chunk));

    trace!(input_len = src.len(), output_len = out.len(), "formatted json");
    Ok(out)
}

/// Re-indent validated JSON text, passing output chunks to `emit`.
fn reindent(src: &[u8], emit: &mut dyn FnMut(&[u8])) {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut opened = false;

    for (i, &b) in src.iter().enumerate() {
        if in_string {
            emit(&src[i..=i]);
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
            continue;
        }

        // Newline after an opening bracket is deferred so `{}` and `[]` stay compact.
        let after_open = std::mem::take(&mut opened);
        let closing = matches!(b, b'}' | b']');
        if after_open && !closing {
            newline(emit, depth);
        }

        match b {
            b'"' => {
                in_string = true;
                emit(&src[i..=i]);
            }
            b'{' | b'[' => {
                emit(&src[i..=i]);
                depth += 1;
                opened = true;
            }
            b'}' | b']' => {
                depth = depth.saturating_sub(1);
                if !after_open {
                    newline(emit, depth);
                }
                emit(&src[i..=i]);
            }
            b',' => {
                emit(b",");
                newline(emit, depth);
            }
            b':' => emit(b": "),
            _ => emit(&src[i..=i]),
        }
    }
}

fn newline(emit: &mut dyn FnMut(&[u8]), depth: usize) {
    emit(b"\n");
    for _ in 0..depth {
        emit(JSON_INDENT);
    }
}

/// Convert a JSON payload to YAML.
///
/// # Errors
///
/// Returns `DataError::Yaml` if the payload cannot be decoded as JSON or the
/// value cannot be encoded as YAML.
pub fn to_yaml(payload: &SecretPayload) -> Result<Rendered> {
    let value: serde_json::Value = serde_json::from_slice(payload.as_bytes())
        .map_err(|e| DataError::Yaml(e.to_string()))?;

    let yaml = serde_yaml::to_string(&value).map_err(|e| DataError::Yaml(e.to_string()))?;

    trace!(input_len = payload.len(), output_len = yaml.len(), "converted json to yaml");
    Ok(Zeroizing::new(yaml.into_bytes()))
}
