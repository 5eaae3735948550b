//! Error types for the docsign library.

use thiserror::Error;

/// The main error type for docsign operations.
#[derive(Error, Debug)]
pub enum SignError {
    /// Error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error with base64 encoding/decoding.
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Key generation failed. Entropy or algorithm failure, not retryable.
    #[error("Key generation failed: {0}")]
    KeyGeneration(#[source] rsa::Error),

    /// Malformed or unsupported key encoding.
    #[error("Invalid key: {0}")]
    KeyParse(String),

    /// Signing failed with the supplied private key.
    #[error("Signing failed: {0}")]
    Signing(#[source] rsa::Error),
}

/// Result type alias for docsign operations.
pub type Result<T> = std::result::Result<T, SignError>;
