//! Secret payload type.
//!
//! Raw secret text as returned by the secret store.

use zeroize::Zeroizing;

/// The secret's string value as opaque bytes.
///
/// Interpreted as structured text only by the format conversions.
/// The buffer is wiped when dropped.
pub struct SecretPayload {
    bytes: Zeroizing<Vec<u8>>,
}

impl SecretPayload {
    /// Wrap raw bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }

    /// Payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<String> for SecretPayload {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<&str> for SecretPayload {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes().to_vec())
    }
}

// Never print secret contents.
impl std::fmt::Debug for SecretPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretPayload")
            .field("len", &self.bytes.len())
            .finish()
    }
}
