// src/lib.rs
//! credvault — an encrypted credential vault with master-password access control
//!
//! Features:
//! - PBKDF2-HMAC-SHA256 master-key derivation
//! - AES-256-GCM sealed single-file store with atomic writes
//! - Idle-timeout session gate in front of every record operation
//! - Plaintext CSV export/import (bilingual headers on import)
//! - Full secure-gate integration for key material

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod export;
pub mod kdf;
pub mod manager;
pub mod records;
pub mod session;
pub mod store;

// Re-export everything users need at the crate root
pub use aliases::{MasterPassword, PlainText, SecureConversionsExt, SecureRandomExt, VaultKey32};
pub use config::load as load_config;
pub use envelope::{format_version, is_vault_file, VaultEnvelope};
pub use error::{FormatError, Result, VaultError};
pub use export::{
    export_selected_to_csv, export_to_csv, import_from_csv, ImportError, ImportReport,
};
pub use manager::VaultManager;
pub use records::{CredentialRecord, RecordUpdate, VaultData};
pub use session::{Session, SessionPolicy};
pub use store::VaultStore;
