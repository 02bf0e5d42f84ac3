// src/crypto/encrypt.rs
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key};

use crate::aliases::{PlainText, VaultKey32};
use crate::consts::NONCE_LEN;
use crate::error::Result;

/// Seal plaintext under a fresh random 96-bit nonce
///
/// Returns the ciphertext (16-byte GCM tag appended) and the nonce that
/// must be stored alongside it. A nonce is never reused for a given key.
pub fn encrypt_to_vec(
    plaintext: &PlainText,
    key: &VaultKey32,
) -> Result<(Vec<u8>, [u8; NONCE_LEN])> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret()));
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher.encrypt(&nonce, plaintext.expose_secret().as_slice())?;
    Ok((ciphertext, nonce.into()))
}
