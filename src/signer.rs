//! Document signing functionality.

use crate::error::Result;
use crate::hash::{hash_bytes, hash_file, hash_reader, DocumentHash};
use crate::keys::PrivateKey;
use crate::signature::Signature;
use std::io::Read;
use std::path::Path;

/// Signs documents with a borrowed private key.
///
/// The document is digested with SHA-256 and the digest signed with the
/// PKCS#1 v1.5 transform, so large inputs can be streamed.
#[derive(Debug)]
pub struct Signer<'a> {
    private_key: &'a PrivateKey,
}

impl<'a> Signer<'a> {
    /// Create a new signer with the given private key.
    pub fn new(private_key: &'a PrivateKey) -> Self {
        Self { private_key }
    }

    /// Sign a byte slice.
    pub fn sign_bytes(&self, data: &[u8]) -> Result<Signature> {
        self.sign_digest(&hash_bytes(data))
    }

    /// Sign a file.
    pub fn sign_file<P: AsRef<Path>>(&self, path: P) -> Result<Signature> {
        self.sign_digest(&hash_file(path)?)
    }

    /// Sign data from a reader (streaming).
    pub fn sign_reader<R: Read>(&self, reader: &mut R) -> Result<Signature> {
        self.sign_digest(&hash_reader(reader)?)
    }

    /// Sign a precomputed document digest.
    pub fn sign_digest(&self, digest: &DocumentHash) -> Result<Signature> {
        let bytes = self.private_key.sign_digest(digest)?;
        Ok(Signature::from_bytes(bytes))
    }
}

/// Convenience function to sign bytes with a private key.
pub fn sign_bytes(private_key: &PrivateKey, data: &[u8]) -> Result<Signature> {
    Signer::new(private_key).sign_bytes(data)
}

/// Convenience function to sign a file with a private key.
pub fn sign_file<P: AsRef<Path>>(private_key: &PrivateKey, path: P) -> Result<Signature> {
    Signer::new(private_key).sign_file(path)
}
