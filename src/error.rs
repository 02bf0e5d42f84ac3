// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VaultError>;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Crypto operation failed: {0}")]
    Crypto(aes_gcm::Error),

    #[error("Container error: {0}")]
    Format(#[from] FormatError),

    #[error("Record serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No vault file at {}", .0.display())]
    VaultMissing(PathBuf),

    #[error("Master password rejected")]
    BadMasterPassword,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session expired after {0}s idle")]
    SessionExpired(i64),

    #[error("Record '{0}' already exists")]
    DuplicateRecord(String),

    #[error("Record '{0}' not found")]
    RecordNotFound(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl From<aes_gcm::Error> for VaultError {
    fn from(err: aes_gcm::Error) -> Self {
        VaultError::Crypto(err)
    }
}

/// Container-level failures detected before any decryption is attempted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("file too short to be a vault container ({0} bytes)")]
    Truncated(usize),

    #[error("bad magic {found:02x?}, not a credvault file")]
    BadMagic { found: [u8; 4] },

    #[error("unsupported container version {0}")]
    UnsupportedVersion(u8),

    #[error("stored KDF iteration count is zero")]
    ZeroIterations,
}
