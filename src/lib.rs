//! # docsign
//!
//! A document signing library using SHA-256 digests and RSA PKCS#1 v1.5
//! signatures.
//!
//! ## Features
//!
//! - **2048-bit RSA keys** with PEM/DER import and export (PKCS#8 and SPKI,
//!   with PKCS#1 fallback on import)
//! - **Deterministic PKCS#1 v1.5 signatures** over SHA-256 document digests
//! - **Fail-closed verification**: malformed input is invalid, never a crash
//! - **Base64 transport encoding** for signatures, with sidecar `.sig` files
//! - **Streaming** support for large documents
//!
//! ## Quick Start
//!
//! ### Generate a Key Pair
//!
//! ```rust
//! use docsign::KeyPair;
//!
//! let keypair = KeyPair::generate().unwrap();
//! let pem = keypair.public_key().to_pem().unwrap();
//! assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----"));
//! ```
//!
//! ### Sign a Document
//!
//! ```rust
//! use docsign::{KeyPair, Signer};
//!
//! let keypair = KeyPair::generate().unwrap();
//! let document = b"Important document content";
//!
//! let signature = Signer::new(keypair.private_key())
//!     .sign_bytes(document)
//!     .unwrap();
//!
//! // Newline-free base64, ready for a text field or a .sig file
//! println!("{}", signature.to_base64());
//! ```
//!
//! ### Verify a Signature
//!
//! ```rust
//! use docsign::{KeyPair, Signer, Verifier};
//!
//! let keypair = KeyPair::generate().unwrap();
//! let document = b"Important document content";
//!
//! let signature = Signer::new(keypair.private_key())
//!     .sign_bytes(document)
//!     .unwrap();
//!
//! assert!(Verifier::verify_bytes(document, &signature, &keypair.public_key()));
//! assert!(!Verifier::verify_bytes(b"tampered", &signature, &keypair.public_key()));
//! ```

pub mod error;
pub mod hash;
pub mod keys;
pub mod signature;
pub mod signer;
pub mod verifier;

// Re-export main types for convenience
pub use error::{Result, SignError};
pub use hash::{hash_bytes, hash_file, hash_reader, DocumentHash, DIGEST_SIZE};
pub use keys::{KeyPair, PrivateKey, PublicKey, KEY_BITS};
pub use signature::{Signature, SIGNATURE_SIZE};
pub use signer::{sign_bytes, sign_file, Signer};
pub use verifier::{verify_base64, verify_bytes, Verifier};
