// src/envelope.rs
//! Vault container framing
//!
//! Everything needed to open a vault travels in one self-describing file:
//!
//! ```text
//! magic     4   b"CVLT"
//! version   1
//! kdf_iter  4   u32 BE — PBKDF2 iterations used for this file
//! salt     16
//! nonce    12
//! payload   *   AES-256-GCM ciphertext || 16-byte tag
//! ```

use crate::consts::{FORMAT_VERSION, NONCE_LEN, SALT_LEN, TAG_LEN, VAULT_MAGIC};
use crate::error::{FormatError, Result};

const HEADER_LEN: usize = VAULT_MAGIC.len() + 1 + 4 + SALT_LEN + NONCE_LEN;
const MIN_LEN: usize = HEADER_LEN + TAG_LEN;

/// Parsed vault container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEnvelope {
    pub kdf_iterations: u32,
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
}

impl VaultEnvelope {
    /// Serialize to the on-disk layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        out.extend_from_slice(VAULT_MAGIC);
        out.push(FORMAT_VERSION);
        out.extend_from_slice(&self.kdf_iterations.to_be_bytes());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parse and validate a container read from disk
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_LEN {
            return Err(FormatError::Truncated(data.len()).into());
        }
        if !is_vault_file(data) {
            let mut found = [0u8; 4];
            found.copy_from_slice(&data[..4]);
            return Err(FormatError::BadMagic { found }.into());
        }
        let version = data[4];
        if version != FORMAT_VERSION {
            return Err(FormatError::UnsupportedVersion(version).into());
        }

        let mut iter_bytes = [0u8; 4];
        iter_bytes.copy_from_slice(&data[5..9]);
        let kdf_iterations = u32::from_be_bytes(iter_bytes);
        if kdf_iterations == 0 {
            return Err(FormatError::ZeroIterations.into());
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&data[9..9 + SALT_LEN]);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&data[9 + SALT_LEN..HEADER_LEN]);

        Ok(Self {
            kdf_iterations,
            salt,
            nonce,
            ciphertext: data[HEADER_LEN..].to_vec(),
        })
    }
}

/// Check whether data looks like a credvault container
pub fn is_vault_file(data: &[u8]) -> bool {
    data.starts_with(VAULT_MAGIC)
}

/// Container version, if the magic matches
pub fn format_version(data: &[u8]) -> Option<u8> {
    if is_vault_file(data) && data.len() > VAULT_MAGIC.len() {
        Some(data[VAULT_MAGIC.len()])
    } else {
        None
    }
}
