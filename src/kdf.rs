// src/kdf.rs
//! Master-key derivation (PBKDF2-HMAC-SHA256)

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

use crate::aliases::{MasterPassword, VaultKey32};
use crate::consts::{KEY_LEN, SALT_LEN};

/// Derive the 256-bit vault key from a master password and salt
///
/// Deterministic for equal inputs. The iteration count lives in the vault
/// container header, so old files stay readable if the default changes.
pub fn derive_key(master: &MasterPassword, salt: &[u8], iterations: u32) -> VaultKey32 {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(master.expose_secret().as_bytes(), salt, iterations, &mut key);
    VaultKey32::new(key)
}

/// Fresh random salt for a new vault container
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
