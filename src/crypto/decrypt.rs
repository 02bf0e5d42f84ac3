// src/crypto/decrypt.rs
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use crate::aliases::{PlainText, VaultKey32};
use crate::consts::NONCE_LEN;
use crate::error::Result;

/// Open ciphertext produced by `encrypt_to_vec`
///
/// A wrong key fails exactly like tampered data does; callers surface
/// both as a rejected master password.
pub fn decrypt_to_vec(
    ciphertext: &[u8],
    key: &VaultKey32,
    nonce: &[u8; NONCE_LEN],
) -> Result<PlainText> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret()));
    let plaintext = cipher.decrypt(Nonce::from_slice(nonce), ciphertext)?;
    Ok(PlainText::new(plaintext))
}
