//! Signature verification functionality.
//!
//! Verification fails closed: malformed base64, a truncated signature, or
//! any parsing anomaly inside the cryptographic check resolves to `false`
//! rather than an error. Invalidity is a normal outcome, not a fault.

use crate::error::Result;
use crate::hash::{hash_bytes, hash_file, hash_reader, DocumentHash};
use crate::keys::PublicKey;
use crate::signature::Signature;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Verifier for document signatures.
pub struct Verifier;

impl Verifier {
    /// Verify a signature over a byte slice.
    pub fn verify_bytes(data: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
        Self::verify_digest(&hash_bytes(data), signature, public_key)
    }

    /// Verify a base64-encoded signature over a byte slice.
    ///
    /// Undecodable signature text is invalid, never an error.
    pub fn verify_base64(data: &[u8], signature_b64: &str, public_key: &PublicKey) -> bool {
        match Signature::from_base64(signature_b64) {
            Ok(signature) => Self::verify_bytes(data, &signature, public_key),
            Err(_) => false,
        }
    }

    /// Verify a signature against a precomputed document digest.
    pub fn verify_digest(
        digest: &DocumentHash,
        signature: &Signature,
        public_key: &PublicKey,
    ) -> bool {
        public_key.verify_digest(digest, signature.as_bytes())
    }

    /// Verify a signature over data from a reader (streaming).
    ///
    /// Only I/O failures on the reader surface as errors; signature-shape
    /// anomalies are `Ok(false)`.
    pub fn verify_reader<R: Read>(
        reader: &mut R,
        signature: &Signature,
        public_key: &PublicKey,
    ) -> Result<bool> {
        let digest = hash_reader(reader)?;
        Ok(Self::verify_digest(&digest, signature, public_key))
    }

    /// Verify a document file against a base64 sidecar signature file.
    ///
    /// A malformed sidecar is `Ok(false)`; missing or unreadable files are
    /// I/O errors.
    pub fn verify_file<P: AsRef<Path>>(
        document_path: P,
        signature_path: P,
        public_key: &PublicKey,
    ) -> Result<bool> {
        let content = fs::read_to_string(signature_path)?;
        let signature = match Signature::from_base64(&content) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        let digest = hash_file(document_path)?;
        Ok(Self::verify_digest(&digest, &signature, public_key))
    }

    /// Quick check for a file and its sidecar; any failure reads as invalid.
    pub fn is_valid_file<P: AsRef<Path>>(
        document_path: P,
        signature_path: P,
        public_key: &PublicKey,
    ) -> bool {
        Self::verify_file(document_path, signature_path, public_key).unwrap_or(false)
    }
}

/// Convenience function to verify a signature over bytes.
pub fn verify_bytes(data: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    Verifier::verify_bytes(data, signature, public_key)
}

/// Convenience function to verify a base64 signature over bytes.
pub fn verify_base64(data: &[u8], signature_b64: &str, public_key: &PublicKey) -> bool {
    Verifier::verify_base64(data, signature_b64, public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyPair;
    use crate::signer::Signer;

    #[test]
    fn test_verify_valid_signature() {
        let keypair = KeyPair::generate().unwrap();
        let data = b"Test document content";

        let signature = Signer::new(keypair.private_key()).sign_bytes(data).unwrap();

        assert!(Verifier::verify_bytes(data, &signature, &keypair.public_key()));
    }

    #[test]
    fn test_verify_tampered_document() {
        let keypair = KeyPair::generate().unwrap();
        let original = b"Original content";
        let tampered = b"Original content!";

        let signature = Signer::new(keypair.private_key())
            .sign_bytes(original)
            .unwrap();

        assert!(!Verifier::verify_bytes(tampered, &signature, &keypair.public_key()));
    }

    #[test]
    fn test_verify_wrong_key() {
        let keypair = KeyPair::generate().unwrap();
        let other = KeyPair::generate().unwrap();
        let data = b"Test document content";

        let signature = Signer::new(keypair.private_key()).sign_bytes(data).unwrap();

        assert!(!Verifier::verify_bytes(data, &signature, &other.public_key()));
    }

    #[test]
    fn test_verify_base64_roundtrip() {
        let keypair = KeyPair::generate().unwrap();
        let data = b"Test document content";

        let signature = Signer::new(keypair.private_key()).sign_bytes(data).unwrap();
        let encoded = signature.to_base64();

        assert!(Verifier::verify_base64(data, &encoded, &keypair.public_key()));
    }

    #[test]
    fn test_malformed_base64_is_invalid() {
        let keypair = KeyPair::generate().unwrap();
        let data = b"Test document content";

        // None of these may panic or error; they are simply invalid
        assert!(!Verifier::verify_base64(data, "", &keypair.public_key()));
        assert!(!Verifier::verify_base64(data, "!!!not base64!!!", &keypair.public_key()));
        assert!(!Verifier::verify_base64(data, "AAAA", &keypair.public_key()));
    }

    #[test]
    fn test_truncated_signature_is_invalid() {
        let keypair = KeyPair::generate().unwrap();
        let data = b"Test document content";

        let signature = Signer::new(keypair.private_key()).sign_bytes(data).unwrap();
        let truncated = Signature::from_bytes(signature.as_bytes()[..128].to_vec());

        assert!(!Verifier::verify_bytes(data, &truncated, &keypair.public_key()));
    }

    #[test]
    fn test_verify_reader() {
        let keypair = KeyPair::generate().unwrap();
        let data = b"Streamed document content";

        let signature = Signer::new(keypair.private_key()).sign_bytes(data).unwrap();

        let mut reader = std::io::Cursor::new(&data[..]);
        let valid = Verifier::verify_reader(&mut reader, &signature, &keypair.public_key()).unwrap();
        assert!(valid);
    }
}
