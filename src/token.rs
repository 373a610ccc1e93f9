use subtle::ConstantTimeEq;

use crate::base64url;
use crate::error::PasetoError;

pub(crate) const HEADER_LOCAL: &str = "v4.local.";
pub(crate) const HEADER_PUBLIC: &str = "v4.public.";

/// Joins a header, a base64url-encoded body, and an optional footer into the final wire string.
pub(crate) fn format_token(header: &str, body: &str, footer: &[u8]) -> String {
  if footer.is_empty() {
    format!("{header}{body}")
  } else {
    format!("{header}{body}.{}", base64url::encode(footer))
  }
}

/// Splits a token against an expected header, checks the footer, and returns the decoded body.
///
/// Runs entirely before any MAC/signature step: nothing returned here has been authenticated yet,
/// no decoded byte is trusted until the caller's MAC or signature check succeeds.
pub(crate) fn parse_token(token: &str, expected_header: &str, expected_footer: &[u8]) -> Result<Vec<u8>, PasetoError> {
  let parts: Vec<&str> = token.split('.').collect();
  if !(3..=4).contains(&parts.len()) {
    return Err(PasetoError::Malformed);
  }

  let header_len = expected_header.len() - 1; // drop the trailing '.'
  let header_parts = &parts[..2].join(".");
  if header_parts.as_str() != &expected_header[..header_len] {
    return Err(PasetoError::Malformed);
  }

  if parts.len() == 4 {
    let wire_footer = base64url::decode(parts[3])?;
    if !bool::from(wire_footer.as_slice().ct_eq(expected_footer)) {
      return Err(PasetoError::Footer);
    }
  } else if !expected_footer.is_empty() {
    return Err(PasetoError::Footer);
  }

  base64url::decode(parts[2])
}

/// A PASETO token that has been structurally split but **not** cryptographically verified.
///
/// Every accessor here is unauthenticated input. The only legitimate use is picking which key to
/// attempt `decrypt_local`/`verify_public` with from a footer-embedded hint (e.g. a key id),
/// never a security decision.
#[derive(Debug, Clone, Copy)]
pub struct UntrustedToken<'a> {
  version: &'a str,
  purpose: &'a str,
  footer_b64: Option<&'a str>,
}

impl<'a> UntrustedToken<'a> {
  /// Splits `token` into its structural parts. Performs no cryptographic verification.
  pub fn try_parse(token: &'a str) -> Result<Self, PasetoError> {
    let parts: Vec<&str> = token.split('.').collect();
    if !(3..=4).contains(&parts.len()) {
      return Err(PasetoError::Malformed);
    }
    Ok(Self {
      version: parts[0],
      purpose: parts[1],
      footer_b64: parts.get(3).copied(),
    })
  }

  /// The unauthenticated version string, e.g. `"v4"`.
  pub fn version(&self) -> &str {
    self.version
  }

  /// The unauthenticated purpose string: `"local"` or `"public"`.
  pub fn purpose(&self) -> &str {
    self.purpose
  }

  /// The raw base64url footer segment, if present. Unauthenticated.
  pub fn footer_base64(&self) -> Option<&str> {
    self.footer_b64
  }

  /// Decodes the footer segment, if present. Unauthenticated, only safe for key lookup.
  pub fn footer_decoded(&self) -> Result<Option<Vec<u8>>, PasetoError> {
    self.footer_b64.map(base64url::decode).transpose()
  }
}
