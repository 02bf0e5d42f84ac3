// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout credvault.

pub use secure_gate::{dynamic_alias, fixed_alias, SecureConversionsExt, SecureRandomExt};

// Fixed-size secrets
fixed_alias!(VaultKey32, 32); // 256-bit key derived from the master password

// Dynamic secrets
dynamic_alias!(MasterPassword, String); // vault unlock passphrase
dynamic_alias!(PlainText, Vec<u8>); // decrypted vault payload
