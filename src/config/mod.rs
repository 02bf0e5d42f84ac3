// src/config/mod.rs
//! Configuration system for credvault
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, Features, Paths, Security};

mod app;
mod defaults;
