use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::assertion::ImplicitAssertion;
use crate::error::PasetoError;
use crate::footer::Footer;
use crate::keys::{PublicKey, SecretKey};
use crate::pae::pae;
use crate::token::{format_token, parse_token, HEADER_PUBLIC};

const SIGNATURE_LEN: usize = 64;

fn signing_key_from(secret: &SecretKey) -> Result<SigningKey, PasetoError> {
  SigningKey::from_keypair_bytes(secret.as_bytes()).map_err(|_| PasetoError::BadKey)
}

fn verifying_key_from(public: &PublicKey) -> Result<VerifyingKey, PasetoError> {
  VerifyingKey::from_bytes(public.as_bytes()).map_err(|_| PasetoError::BadKey)
}

/// Signs `payload` with `secret`, producing a `v4.public` token.
///
/// The signature covers the header, payload, footer, and implicit assertion via PAE. The footer
/// is transmitted alongside the body but never itself signed outside that encoding.
pub fn sign_public(secret: &SecretKey, payload: &[u8], footer: Footer, assertion: ImplicitAssertion) -> Result<String, PasetoError> {
  let signing_key = signing_key_from(secret)?;

  let pre_auth = pae(&[HEADER_PUBLIC.as_bytes(), payload, footer.as_ref(), assertion.as_ref()]);
  let signature = signing_key.sign(&pre_auth);

  let mut body = Vec::with_capacity(payload.len() + SIGNATURE_LEN);
  body.extend_from_slice(payload);
  body.extend_from_slice(&signature.to_bytes());

  Ok(format_token(HEADER_PUBLIC, &crate::base64url::encode(&body), footer.as_ref()))
}

/// Verifies `token` against `public`, returning the signed payload on success.
///
/// `footer` and `assertion` must match exactly what the signer used, or this returns
/// [`PasetoError::Auth`]/[`PasetoError::Footer`] without ever exposing the payload.
pub fn verify_public(public: &PublicKey, token: &str, footer: Footer, assertion: ImplicitAssertion) -> Result<Vec<u8>, PasetoError> {
  let decoded = parse_token(token, HEADER_PUBLIC, footer.as_ref())?;
  if decoded.len() < SIGNATURE_LEN {
    return Err(PasetoError::Malformed);
  }

  let split = decoded.len() - SIGNATURE_LEN;
  let payload = &decoded[..split];
  let sig_bytes = &decoded[split..];

  let verifying_key = verifying_key_from(public)?;
  let signature = Signature::from_slice(sig_bytes).map_err(|_| PasetoError::Malformed)?;

  let pre_auth = pae(&[HEADER_PUBLIC.as_bytes(), payload, footer.as_ref(), assertion.as_ref()]);
  verifying_key.verify(&pre_auth, &signature).map_err(|_| PasetoError::Auth)?;

  Ok(payload.to_vec())
}
