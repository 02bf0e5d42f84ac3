// src/store.rs
//! Encrypted-record store
//!
//! One vault = one sealed file. Every save rewrites the whole container
//! with a fresh salt and nonce, staged through a temp file in the same
//! directory so a crash leaves either the old vault or the new one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::aliases::{MasterPassword, PlainText};
use crate::consts::KDF_ITERATIONS;
use crate::crypto::{decrypt_to_vec, encrypt_to_vec};
use crate::envelope::VaultEnvelope;
use crate::error::{Result, VaultError};
use crate::kdf::{derive_key, generate_salt};
use crate::records::VaultData;

/// Handle to a vault file; holds no decrypted state between calls
#[derive(Debug, Clone)]
pub struct VaultStore {
    path: PathBuf,
    kdf_iterations: u32,
}

impl VaultStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            kdf_iterations: KDF_ITERATIONS,
        }
    }

    /// Override the iteration count used for newly written files
    pub fn with_kdf_iterations(mut self, iterations: u32) -> Self {
        self.kdf_iterations = iterations;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Decrypt and deserialize the whole vault
    ///
    /// An AEAD failure means a wrong master password or a tampered file;
    /// both surface as `BadMasterPassword`.
    pub fn load(&self, master: &MasterPassword) -> Result<VaultData> {
        if !self.exists() {
            return Err(VaultError::VaultMissing(self.path.clone()));
        }
        let raw = fs::read(&self.path)?;
        let envelope = VaultEnvelope::parse(&raw)?;
        let key = derive_key(master, &envelope.salt, envelope.kdf_iterations);
        let plaintext = decrypt_to_vec(&envelope.ciphertext, &key, &envelope.nonce)
            .map_err(|_| VaultError::BadMasterPassword)?;
        let data = serde_json::from_slice(plaintext.expose_secret())?;
        Ok(data)
    }

    /// Serialize, seal, and atomically replace the vault file
    pub fn save(&self, master: &MasterPassword, data: &VaultData) -> Result<()> {
        let plaintext = PlainText::new(serde_json::to_vec(data)?);
        let salt = generate_salt();
        let key = derive_key(master, &salt, self.kdf_iterations);
        let (ciphertext, nonce) = encrypt_to_vec(&plaintext, &key)?;
        let envelope = VaultEnvelope {
            kdf_iterations: self.kdf_iterations,
            salt,
            nonce,
            ciphertext,
        };
        self.write_atomic(&envelope.to_bytes())?;
        debug!(records = data.len(), "vault saved");
        Ok(())
    }

    /// Create an empty vault if none exists yet
    ///
    /// Returns `false` when the file is already present.
    pub fn initialize(&self, master: &MasterPassword) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.save(master, &VaultData::new())?;
        info!(path = %self.path.display(), "vault initialized");
        Ok(true)
    }

    /// Re-key the vault under a new master password
    pub fn change_master(&self, old: &MasterPassword, new: &MasterPassword) -> Result<()> {
        let data = self.load(old)?;
        self.save(new, &data)?;
        info!("master password changed");
        Ok(())
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };
        let mut tmp = tempfile::Builder::new()
            .prefix(".vault-")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o600))?;
        }
        tmp.persist(&self.path).map_err(|e| VaultError::Io(e.error))?;
        Ok(())
    }
}
