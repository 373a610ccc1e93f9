use blake2::digest::consts::{U32, U56};
use blake2::digest::{FixedOutput, KeyInit, Update};
use blake2::Blake2bMac;
use zeroize::Zeroize;

use crate::error::PasetoError;

const ENCRYPTION_KEY_SEPARATOR: &[u8] = b"paseto-encryption-key";
const AUTHENTICATION_KEY_SEPARATOR: &[u8] = b"paseto-auth-key-for-aead";

/// The XChaCha20 key and nonce derived from the master key and per-token nonce.
pub(crate) struct EncryptionKey {
  pub(crate) key: [u8; 32],
  pub(crate) nonce: [u8; 24],
}

impl Drop for EncryptionKey {
  fn drop(&mut self) {
    self.key.zeroize();
    self.nonce.zeroize();
  }
}

/// The BLAKE2b-MAC key used to tag (and verify) the Pre-Authentication Encoding.
pub(crate) struct AuthenticationKey(pub(crate) [u8; 32]);

impl Drop for AuthenticationKey {
  fn drop(&mut self) {
    self.0.zeroize();
  }
}

/// Derives `(Ek || n2, Ak)` from the 32-byte master key and the 32-byte per-token nonce via two
/// domain-separated keyed-BLAKE2b calls. The two calls are independent (distinct, non-prefix
/// domain separators) so AEAD key material and MAC key material never collide even though both
/// trace back to the same master key and nonce.
pub(crate) fn derive_local_keys(master_key: &[u8; 32], nonce: &[u8; 32]) -> Result<(EncryptionKey, AuthenticationKey), PasetoError> {
  let mut enc_mac = Blake2bMac::<U56>::new_from_slice(master_key)?;
  enc_mac.update(ENCRYPTION_KEY_SEPARATOR);
  enc_mac.update(nonce);
  let enc_out = enc_mac.finalize_fixed();

  let mut key = [0u8; 32];
  let mut iv = [0u8; 24];
  key.copy_from_slice(&enc_out[..32]);
  iv.copy_from_slice(&enc_out[32..56]);

  let mut auth_mac = Blake2bMac::<U32>::new_from_slice(master_key)?;
  auth_mac.update(AUTHENTICATION_KEY_SEPARATOR);
  auth_mac.update(nonce);
  let auth_out = auth_mac.finalize_fixed();

  let mut auth_key = [0u8; 32];
  auth_key.copy_from_slice(&auth_out);

  Ok((EncryptionKey { key, nonce: iv }, AuthenticationKey(auth_key)))
}
