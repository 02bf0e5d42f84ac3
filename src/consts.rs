// src/consts.rs
//! Shared constants — security parameters and defaults

/// PBKDF2-HMAC-SHA256 iterations for newly written vaults
// ~0.1s on modern hardware; the per-file header records the count actually used
pub const KDF_ITERATIONS: u32 = 100_000;

/// Salt length fed to the KDF
pub const SALT_LEN: usize = 16;

/// AES-256-GCM nonce length (96-bit, the GCM standard size)
pub const NONCE_LEN: usize = 12;

/// Derived vault key length (AES-256)
pub const KEY_LEN: usize = 32;

/// GCM authentication tag length appended to the ciphertext
pub const TAG_LEN: usize = 16;

/// Header magic for credvault container files
pub const VAULT_MAGIC: &[u8; 4] = b"CVLT";

/// Current container format version
pub const FORMAT_VERSION: u8 = 1;

/// Default vault location, relative to the working directory
pub const DEFAULT_VAULT_FILE: &str = "password_manager/data/passwords.enc";

/// Master password used when bootstrapping a fresh vault
// First-run convenience only — the CLI tells the user to change it
pub const DEFAULT_MASTER_PASSWORD: &str = "000000";

/// Idle seconds before an unlocked session expires
pub const DEFAULT_SESSION_TIMEOUT_SECS: i64 = 60;
