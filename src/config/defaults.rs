// src/config/defaults.rs
use crate::config::app::{Features, Paths, Security};
use crate::consts::{DEFAULT_SESSION_TIMEOUT_SECS, DEFAULT_VAULT_FILE, KDF_ITERATIONS};

pub fn default_paths() -> Paths {
    Paths {
        vault_file: DEFAULT_VAULT_FILE.into(),
    }
}

pub fn default_security() -> Security {
    Security {
        kdf_iterations: KDF_ITERATIONS,
        session_timeout_secs: DEFAULT_SESSION_TIMEOUT_SECS,
    }
}

pub fn default_features() -> Features {
    Features {
        bootstrap_default_master: true,
        allow_insecure_export: true,
    }
}
