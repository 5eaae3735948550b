//! Signature value and base64 transport encoding.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Signature length in bytes for a 2048-bit key (one modulus width).
pub const SIGNATURE_SIZE: usize = 256;

/// A PKCS#1 v1.5 signature over a document digest.
///
/// Held as raw bytes; presented as newline-free base64 for transport and
/// for sidecar `.sig` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Create a signature from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Signature length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as newline-free base64, suitable for a text field or a
    /// sidecar file.
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }

    /// Decode from base64 text. Surrounding whitespace is tolerated.
    pub fn from_base64(s: &str) -> Result<Self> {
        use base64::Engine;
        let bytes = base64::engine::general_purpose::STANDARD.decode(s.trim())?;
        Ok(Self(bytes))
    }

    /// Save the signature as base64 text, conventionally with a `.sig`
    /// suffix next to the document.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_base64())?;
        Ok(())
    }

    /// Load a signature from a base64 sidecar file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_base64(&content)
    }
}
