use crate::error::PasetoError;
use ring::rand::{SecureRandom, SystemRandom};
use std::convert::TryFrom;
use std::fmt::Debug;
use std::ops::Deref;
use zeroize::Zeroize;

/// A fixed-size byte buffer used for every key, nonce, and intermediate KDF input in this crate.
///
/// Zeroizes its backing array on drop. `Debug` never prints the contents.
#[derive(Zeroize, Clone)]
#[zeroize(drop)]
pub struct Key<const KEYSIZE: usize>([u8; KEYSIZE]);

impl<const KEYSIZE: usize> Default for Key<KEYSIZE> {
  fn default() -> Self {
    Self([0u8; KEYSIZE])
  }
}

impl<const KEYSIZE: usize> AsRef<[u8]> for Key<KEYSIZE> {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl<const KEYSIZE: usize> Deref for Key<KEYSIZE> {
  type Target = [u8; KEYSIZE];
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<const KEYSIZE: usize> From<[u8; KEYSIZE]> for Key<KEYSIZE> {
  fn from(key: [u8; KEYSIZE]) -> Self {
    Self(key)
  }
}

impl<const KEYSIZE: usize> TryFrom<&[u8]> for Key<KEYSIZE> {
  type Error = PasetoError;

  fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
    if key.len() != KEYSIZE {
      return Err(PasetoError::BadKey);
    }
    let mut me = Key::<KEYSIZE>::default();
    me.0.copy_from_slice(key);
    Ok(me)
  }
}

impl<const KEYSIZE: usize> TryFrom<&str> for Key<KEYSIZE> {
  type Error = PasetoError;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    let key = hex::decode(value).map_err(|_| PasetoError::BadKey)?;
    Key::<KEYSIZE>::try_from(key.as_slice())
  }
}

impl<const KEYSIZE: usize> Key<KEYSIZE> {
  /// Draws `KEYSIZE` bytes from the OS CSPRNG. Used for generating fresh keys, not nonces
  /// (nonces go through the [`crate::entropy::NonceSource`] abstraction so tests can inject a
  /// deterministic source).
  pub fn try_new_random() -> Result<Self, PasetoError> {
    let rng = SystemRandom::new();
    let mut buf = [0u8; KEYSIZE];
    rng.fill(&mut buf)?;
    Ok(Self(buf))
  }
}

impl<const KEYSIZE: usize> Debug for Key<KEYSIZE> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Key<{KEYSIZE}>(REDACTED)")
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn rejects_wrong_length() {
    let short = [0u8; 10];
    assert!(matches!(Key::<32>::try_from(short.as_slice()), Err(PasetoError::BadKey)));
  }

  #[test]
  fn accepts_exact_length() {
    let bytes = [7u8; 32];
    let key = Key::<32>::try_from(bytes.as_slice()).unwrap();
    assert_eq!(key.as_ref(), &bytes[..]);
  }

  #[test]
  fn parses_hex() {
    let key = Key::<4>::try_from("deadbeef").unwrap();
    assert_eq!(key.as_ref(), &[0xde, 0xad, 0xbe, 0xef]);
  }

  #[test]
  fn random_keys_differ() {
    let a = Key::<32>::try_new_random().unwrap();
    let b = Key::<32>::try_new_random().unwrap();
    assert_ne!(a.as_ref(), b.as_ref());
  }

  #[test]
  fn debug_never_prints_bytes() {
    let key = Key::<4>::from([1, 2, 3, 4]);
    assert_eq!(format!("{key:?}"), "Key<4>(REDACTED)");
  }
}
