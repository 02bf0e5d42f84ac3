// src/config/app.rs
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_paths")]
    pub paths: Paths,
    #[serde(default = "default_security")]
    pub security: Security,
    #[serde(default = "default_features")]
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub vault_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
    pub kdf_iterations: u32,
    pub session_timeout_secs: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub bootstrap_default_master: bool,
    pub allow_insecure_export: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            security: default_security(),
            features: default_features(),
        }
    }
}

impl Config {
    /// Parse without touching the filesystem or the global
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut conf = read_config_file();

        if let Ok(path) = std::env::var("CREDVAULT_VAULT_FILE") {
            conf.paths.vault_file = path;
        }

        conf
    })
}

/// `CREDVAULT_CONFIG` → `./credvault.toml` → `<config_dir>/credvault/config.toml`
fn candidate_paths() -> Vec<PathBuf> {
    if let Ok(explicit) = std::env::var("CREDVAULT_CONFIG") {
        return vec![PathBuf::from(explicit)];
    }
    let mut paths = vec![PathBuf::from("credvault.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("credvault").join("config.toml"));
    }
    paths
}

fn read_config_file() -> Config {
    for path in candidate_paths() {
        if path.exists() {
            let content = std::fs::read_to_string(&path).expect("Failed to read config file");
            return toml::from_str(&content).expect("Invalid TOML in config file");
        }
    }
    debug!("no config file found, using built-in defaults");
    Config::default()
}
