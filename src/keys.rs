use std::convert::TryFrom;

use crate::error::PasetoError;
use crate::key::Key;

/// The 32-byte symmetric master key for `v4.local`.
#[derive(Clone)]
pub struct LocalKey(Key<32>);

impl LocalKey {
  pub(crate) fn as_bytes(&self) -> &[u8; 32] {
    &self.0
  }

  /// Generates a fresh random local key from the OS CSPRNG.
  pub fn generate() -> Result<Self, PasetoError> {
    Ok(Self(Key::try_new_random()?))
  }
}

impl TryFrom<&[u8]> for LocalKey {
  type Error = PasetoError;
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    Ok(Self(Key::try_from(bytes)?))
  }
}

/// The 64-byte Ed25519 expanded secret key for `v4.public` (32-byte seed ‖ 32-byte public key).
#[derive(Clone)]
pub struct SecretKey(Key<64>);

impl SecretKey {
  pub(crate) fn as_bytes(&self) -> &[u8; 64] {
    &self.0
  }
}

impl TryFrom<&[u8]> for SecretKey {
  type Error = PasetoError;
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    Ok(Self(Key::try_from(bytes)?))
  }
}

/// The 32-byte Ed25519 public key for `v4.public`.
#[derive(Clone)]
pub struct PublicKey(Key<32>);

impl PublicKey {
  pub(crate) fn as_bytes(&self) -> &[u8; 32] {
    &self.0
  }
}

impl TryFrom<&[u8]> for PublicKey {
  type Error = PasetoError;
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    Ok(Self(Key::try_from(bytes)?))
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn local_key_rejects_wrong_size() {
    assert!(matches!(LocalKey::try_from([0u8; 31].as_slice()), Err(PasetoError::BadKey)));
  }

  #[test]
  fn secret_key_rejects_wrong_size() {
    assert!(matches!(SecretKey::try_from([0u8; 63].as_slice()), Err(PasetoError::BadKey)));
  }

  #[test]
  fn public_key_rejects_wrong_size() {
    assert!(matches!(PublicKey::try_from([0u8; 33].as_slice()), Err(PasetoError::BadKey)));
  }

  #[test]
  fn generated_local_keys_are_32_bytes() {
    let key = LocalKey::generate().unwrap();
    assert_eq!(key.as_bytes().len(), 32);
  }
}
