//! A minimal, dependency-honest core codec for `v4.local` and `v4.public` PASETO tokens.
//!
//! This crate implements exactly two operations per purpose: encrypt/decrypt for `v4.local`,
//! sign/verify for `v4.public`, and nothing above them. There is no claims model, no expiry
//! checking, no key management, and no registry of custom footers. Callers who want those build
//! them on top of [`encrypt_local`]/[`decrypt_local`]/[`sign_public`]/[`verify_public`].
//!
//! ```
//! use paseto4_core::{encrypt_local, decrypt_local, LocalKey, OsRandom, Footer, ImplicitAssertion};
//!
//! let key = LocalKey::generate().unwrap();
//! let entropy = OsRandom;
//! let token = encrypt_local(&key, &entropy, b"hello", Footer::default(), ImplicitAssertion::default()).unwrap();
//! let payload = decrypt_local(&key, &token, Footer::default(), ImplicitAssertion::default()).unwrap();
//! assert_eq!(payload, b"hello");
//! ```

mod assertion;
mod base64url;
mod entropy;
mod error;
mod footer;
mod kdf;
mod key;
mod keys;
mod local;
mod pae;
mod public;
mod token;

pub use assertion::ImplicitAssertion;
pub use entropy::{FixedEntropy, NonceSource, OsRandom};
pub use error::PasetoError;
pub use footer::Footer;
pub use keys::{LocalKey, PublicKey, SecretKey};
pub use local::{decrypt_local, encrypt_local};
pub use public::{sign_public, verify_public};
pub use token::UntrustedToken;

#[cfg(any(test, feature = "test-vectors"))]
pub use local::encrypt_local_with_fixed_nonce_for_test_vectors;
