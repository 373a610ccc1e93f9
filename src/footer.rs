use std::ops::Deref;

/// The token footer: an application-supplied, transmitted, authenticated byte string.
///
/// Treated as opaque bytes, this crate never parses it as JSON or anything else. An absent
/// footer on the wire is equivalent to `Footer::default()` (zero-length).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer<'a>(&'a [u8]);

impl<'a> Deref for Footer<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl<'a> AsRef<[u8]> for Footer<'a> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}

impl<'a> From<&'a [u8]> for Footer<'a> {
  fn from(bytes: &'a [u8]) -> Self {
    Self(bytes)
  }
}

impl<'a> From<&'a str> for Footer<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn default_is_empty() {
    assert!(Footer::default().as_ref().is_empty());
  }

  #[test]
  fn from_str_and_from_bytes_agree() {
    assert_eq!(Footer::from("hello"), Footer::from(b"hello".as_slice()));
  }
}
