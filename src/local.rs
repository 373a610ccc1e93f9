use blake2::digest::consts::U32;
use blake2::digest::{FixedOutput, KeyInit, Update};
use blake2::Blake2bMac;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::XChaCha20;
use subtle::ConstantTimeEq;

use crate::assertion::ImplicitAssertion;
use crate::entropy::NonceSource;
use crate::error::PasetoError;
use crate::footer::Footer;
use crate::kdf::derive_local_keys;
use crate::keys::LocalKey;
use crate::pae::pae;
use crate::token::{format_token, parse_token, HEADER_LOCAL};

const NONCE_LEN: usize = 32;
const TAG_LEN: usize = 32;

fn xchacha20_apply(key: &[u8; 32], nonce: &[u8; 24], data: &mut [u8]) {
  let mut cipher = XChaCha20::new(key.into(), nonce.into());
  cipher.apply_keystream(data);
}

fn tag_for(auth_key: &[u8; 32], pre_auth: &[u8]) -> Result<[u8; 32], PasetoError> {
  let mut mac = Blake2bMac::<U32>::new_from_slice(auth_key)?;
  mac.update(pre_auth);
  let out = mac.finalize_fixed();
  let mut tag = [0u8; 32];
  tag.copy_from_slice(&out);
  Ok(tag)
}

fn encrypt_with_nonce(
  key: &LocalKey,
  nonce: &[u8; 32],
  payload: &[u8],
  footer: Footer,
  assertion: ImplicitAssertion,
) -> Result<String, PasetoError> {
  let (enc_key, auth_key) = derive_local_keys(key.as_bytes(), nonce)?;

  let mut ciphertext = payload.to_vec();
  xchacha20_apply(&enc_key.key, &enc_key.nonce, &mut ciphertext);

  let pre_auth = pae(&[
    HEADER_LOCAL.as_bytes(),
    nonce.as_slice(),
    &ciphertext,
    footer.as_ref(),
    assertion.as_ref(),
  ]);
  let tag = tag_for(&auth_key.0, &pre_auth)?;

  let mut raw = Vec::with_capacity(NONCE_LEN + ciphertext.len() + TAG_LEN);
  raw.extend_from_slice(nonce);
  raw.extend_from_slice(&ciphertext);
  raw.extend_from_slice(&tag);

  Ok(format_token(HEADER_LOCAL, &crate::base64url::encode(&raw), footer.as_ref()))
}

/// Encrypts `payload` under `key`, drawing a fresh 32-byte nonce from `entropy`.
///
/// `footer` is transmitted and authenticated; `assertion` is authenticated but never transmitted.
pub fn encrypt_local(
  key: &LocalKey,
  entropy: &dyn NonceSource,
  payload: &[u8],
  footer: Footer,
  assertion: ImplicitAssertion,
) -> Result<String, PasetoError> {
  let mut nonce = [0u8; 32];
  entropy.fill(&mut nonce)?;
  encrypt_with_nonce(key, &nonce, payload, footer, assertion)
}

/// Decrypts and authenticates `token`, returning the original payload.
///
/// No byte of the ciphertext is decrypted, and no intermediate buffer is returned, until the tag
/// comparison below succeeds.
pub fn decrypt_local(key: &LocalKey, token: &str, footer: Footer, assertion: ImplicitAssertion) -> Result<Vec<u8>, PasetoError> {
  let decoded = parse_token(token, HEADER_LOCAL, footer.as_ref())?;
  if decoded.len() < NONCE_LEN + TAG_LEN {
    return Err(PasetoError::Malformed);
  }

  let mut nonce = [0u8; 32];
  nonce.copy_from_slice(&decoded[..NONCE_LEN]);
  let ciphertext_end = decoded.len() - TAG_LEN;
  let ciphertext = &decoded[NONCE_LEN..ciphertext_end];
  let wire_tag = &decoded[ciphertext_end..];

  let (enc_key, auth_key) = derive_local_keys(key.as_bytes(), &nonce)?;

  let pre_auth = pae(&[
    HEADER_LOCAL.as_bytes(),
    nonce.as_slice(),
    ciphertext,
    footer.as_ref(),
    assertion.as_ref(),
  ]);
  let computed_tag = tag_for(&auth_key.0, &pre_auth)?;

  if !bool::from(computed_tag.ct_eq(wire_tag)) {
    return Err(PasetoError::Auth);
  }

  let mut plaintext = ciphertext.to_vec();
  xchacha20_apply(&enc_key.key, &enc_key.nonce, &mut plaintext);
  Ok(plaintext)
}

/// Encrypts with a caller-chosen nonce, bypassing the entropy source entirely.
///
/// This exists only so `tests/version4_test_vectors.rs` can reproduce the published test vectors
/// byte-for-byte. It is compiled only for test builds or under the non-default `test-vectors`
/// feature, never reachable from a default production build.
#[cfg(any(test, feature = "test-vectors"))]
pub fn encrypt_local_with_fixed_nonce_for_test_vectors(
  key: &LocalKey,
  nonce: &[u8; 32],
  payload: &[u8],
  footer: Footer,
  assertion: ImplicitAssertion,
) -> Result<String, PasetoError> {
  encrypt_with_nonce(key, nonce, payload, footer, assertion)
}
