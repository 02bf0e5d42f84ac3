// tests/common.rs
//! Shared test utilities — fast stores and canned records

#![allow(dead_code)] // not every test binary uses every helper

use std::path::Path;

use credvault::{CredentialRecord, MasterPassword, VaultManager, VaultStore};

/// Low iteration count so tests stay fast; production default lives in consts
pub const TEST_KDF_ITERATIONS: u32 = 1_000;

pub fn master(password: &str) -> MasterPassword {
    MasterPassword::new(password.to_string())
}

pub fn test_store<P: AsRef<Path>>(path: P) -> VaultStore {
    VaultStore::new(path).with_kdf_iterations(TEST_KDF_ITERATIONS)
}

/// Record with only the required fields filled in
pub fn record(account: &str, password: &str) -> CredentialRecord {
    CredentialRecord {
        account: account.to_string(),
        password: password.to_string(),
        email: String::new(),
        phone: String::new(),
        remark: String::new(),
    }
}

pub fn full_record(
    account: &str,
    password: &str,
    email: &str,
    phone: &str,
    remark: &str,
) -> CredentialRecord {
    CredentialRecord {
        account: account.to_string(),
        password: password.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        remark: remark.to_string(),
    }
}

/// Fresh vault in `dir`, already initialized and authenticated
pub fn unlocked_manager(dir: &Path, password: &str) -> VaultManager {
    let store = test_store(dir.join("passwords.enc"));
    store.initialize(&master(password)).unwrap();
    let mut manager = VaultManager::new(store);
    manager.authenticate(master(password)).unwrap();
    manager
}
