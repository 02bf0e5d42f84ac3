// src/crypto/mod.rs
//! Pure in-memory AEAD primitives (AES-256-GCM)
//!
//! Container framing and file I/O live in `envelope` and `store`;
//! this module only seals and opens byte buffers.

pub use decrypt::decrypt_to_vec;
pub use encrypt::encrypt_to_vec;

mod decrypt;
mod encrypt;
