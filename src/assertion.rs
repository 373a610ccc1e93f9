use std::ops::Deref;

/// A caller-supplied byte string that is authenticated but never transmitted.
///
/// Included in the Pre-Authentication Encoding so a verifier who doesn't pass the same implicit
/// assertion bytes the signer/encryptor used gets [`crate::PasetoError::Auth`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplicitAssertion<'a>(&'a [u8]);

impl<'a> Deref for ImplicitAssertion<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl<'a> AsRef<[u8]> for ImplicitAssertion<'a> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}

impl<'a> From<&'a [u8]> for ImplicitAssertion<'a> {
  fn from(bytes: &'a [u8]) -> Self {
    Self(bytes)
  }
}

impl<'a> From<&'a str> for ImplicitAssertion<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn default_is_empty() {
    assert!(ImplicitAssertion::default().as_ref().is_empty());
  }

  #[test]
  fn from_str_and_from_bytes_agree() {
    assert_eq!(ImplicitAssertion::from("ctx"), ImplicitAssertion::from(b"ctx".as_slice()));
  }
}
