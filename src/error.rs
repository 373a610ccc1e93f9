use thiserror::Error;

/// The flat error taxonomy surfaced by every operation in this crate.
///
/// No variant carries key material, plaintext, or derived subkeys. On any
/// authentication failure the caller gets a kind, nothing else.
#[derive(Debug, Error)]
pub enum PasetoError {
  /// A key argument was the wrong length or shape for the operation it was passed to.
  #[error("key was not in the correct format")]
  BadKey,

  /// The caller-supplied entropy source returned fewer bytes than requested, or failed outright.
  #[error("entropy source failed to fill the nonce")]
  Entropy,

  /// The token is not well-formed: wrong segment count, wrong header, undersized body, or
  /// invalid base64url.
  #[error("the token is malformed")]
  Malformed,

  /// The footer decoded from the token does not byte-for-byte match the footer the caller expects.
  #[error("the provided footer does not match the token")]
  Footer,

  /// The MAC (local) or signature (public) failed to verify.
  #[error("authentication failed")]
  Auth,

  /// A cryptographic primitive rejected input this crate's own invariants should have prevented.
  #[error("an internal cryptographic error occurred")]
  Internal,
}

impl From<base64::DecodeError> for PasetoError {
  fn from(_: base64::DecodeError) -> Self {
    PasetoError::Malformed
  }
}

impl From<std::array::TryFromSliceError> for PasetoError {
  fn from(_: std::array::TryFromSliceError) -> Self {
    PasetoError::Internal
  }
}

impl From<std::str::Utf8Error> for PasetoError {
  fn from(_: std::str::Utf8Error) -> Self {
    PasetoError::Malformed
  }
}

impl From<ring::error::Unspecified> for PasetoError {
  fn from(_: ring::error::Unspecified) -> Self {
    PasetoError::Entropy
  }
}

impl From<blake2::digest::InvalidLength> for PasetoError {
  fn from(_: blake2::digest::InvalidLength) -> Self {
    PasetoError::Internal
  }
}

impl From<ed25519_dalek::ed25519::Error> for PasetoError {
  fn from(_: ed25519_dalek::ed25519::Error) -> Self {
    PasetoError::Auth
  }
}
