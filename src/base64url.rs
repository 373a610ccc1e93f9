use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::PasetoError;

/// Encodes `bytes` as unpadded, URL-safe base64 (RFC 4648 §5, no `=`).
pub(crate) fn encode(bytes: &[u8]) -> String {
  URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes unpadded, URL-safe base64.
///
/// Rejects `=` padding, any byte outside the URL-safe alphabet, and lengths congruent to 1 mod 4.
/// The underlying engine already enforces all three, but we check the length up front so the
/// error is always [`PasetoError::Malformed`] rather than a base64-crate-specific variant leaking
/// through.
pub(crate) fn decode(s: &str) -> Result<Vec<u8>, PasetoError> {
  if s.contains('=') || s.len() % 4 == 1 {
    return Err(PasetoError::Malformed);
  }
  URL_SAFE_NO_PAD.decode(s).map_err(PasetoError::from)
}
