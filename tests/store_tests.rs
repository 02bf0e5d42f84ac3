// tests/store_tests.rs
mod common;

use std::fs;

use common::{full_record, master, record, test_store, TEST_KDF_ITERATIONS};
use credvault::envelope::VaultEnvelope;
use credvault::error::VaultError;
use credvault::records::VaultData;
use credvault::VaultStore;
use tempfile::tempdir;

#[test]
fn test_initialize_creates_vault_and_parent_dirs() {
    let dir = tempdir().unwrap();
    let store = test_store(dir.path().join("data").join("nested").join("passwords.enc"));

    assert!(!store.exists());
    assert!(store.initialize(&master("hunter2")).unwrap());
    assert!(store.exists());
    assert!(!store.initialize(&master("hunter2")).unwrap());

    let data = store.load(&master("hunter2")).unwrap();
    assert!(data.is_empty());
}

#[test]
fn test_save_load_roundtrip() {
    let dir = tempdir().unwrap();
    let store = test_store(dir.path().join("passwords.enc"));

    let mut data = VaultData::new();
    data.insert("gmail".to_string(), record("user@gmail.com", "p4ss"));
    data.insert(
        "微信".to_string(),
        full_record("wx_user", "密码123", "user@example.com", "13800138000", "个人账号"),
    );

    store.save(&master("hunter2"), &data).unwrap();
    let loaded = store.load(&master("hunter2")).unwrap();
    assert_eq!(loaded, data);
}

#[test]
fn test_load_missing_file_is_a_distinct_error() {
    let dir = tempdir().unwrap();
    let store = test_store(dir.path().join("nope.enc"));

    let err = store.load(&master("any")).unwrap_err();
    assert!(matches!(err, VaultError::VaultMissing(_)));
}

#[test]
fn test_load_rejects_wrong_password() {
    let dir = tempdir().unwrap();
    let store = test_store(dir.path().join("passwords.enc"));
    store.initialize(&master("right")).unwrap();

    let err = store.load(&master("wrong")).unwrap_err();
    assert!(matches!(err, VaultError::BadMasterPassword));
}

#[test]
fn test_load_rejects_tampered_payload_as_bad_password() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("passwords.enc");
    let store = test_store(&path);

    let mut data = VaultData::new();
    data.insert("site".to_string(), record("acct", "pw"));
    store.save(&master("hunter2"), &data).unwrap();

    let mut raw = fs::read(&path).unwrap();
    let last = raw.len() - 1;
    raw[last] ^= 0x01;
    fs::write(&path, &raw).unwrap();

    let err = store.load(&master("hunter2")).unwrap_err();
    assert!(matches!(err, VaultError::BadMasterPassword));
}

#[test]
fn test_load_rejects_corrupt_container() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("passwords.enc");
    let store = test_store(&path);

    fs::write(&path, b"CV").unwrap();
    assert!(matches!(
        store.load(&master("x")).unwrap_err(),
        VaultError::Format(_)
    ));

    fs::write(&path, vec![b'X'; 64]).unwrap();
    assert!(matches!(
        store.load(&master("x")).unwrap_err(),
        VaultError::Format(_)
    ));
}

#[test]
fn test_change_master_rekeys_the_file() {
    let dir = tempdir().unwrap();
    let store = test_store(dir.path().join("passwords.enc"));

    let mut data = VaultData::new();
    data.insert("site".to_string(), record("acct", "pw"));
    store.save(&master("old"), &data).unwrap();

    store.change_master(&master("old"), &master("new")).unwrap();

    assert!(matches!(
        store.load(&master("old")).unwrap_err(),
        VaultError::BadMasterPassword
    ));
    assert_eq!(store.load(&master("new")).unwrap(), data);
}

#[test]
fn test_file_records_its_own_iteration_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("passwords.enc");
    test_store(&path).initialize(&master("pw")).unwrap();

    let envelope = VaultEnvelope::parse(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(envelope.kdf_iterations, TEST_KDF_ITERATIONS);

    // a store configured differently still opens it via the header
    let other = VaultStore::new(&path).with_kdf_iterations(77);
    assert!(other.load(&master("pw")).is_ok());
}

#[test]
fn test_save_replaces_atomically_without_leftovers() {
    let dir = tempdir().unwrap();
    let store = test_store(dir.path().join("passwords.enc"));
    store.initialize(&master("pw")).unwrap();

    let mut data = VaultData::new();
    for i in 0..5 {
        data.insert(format!("site-{i}"), record("acct", "pw"));
        store.save(&master("pw"), &data).unwrap();
    }

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("passwords.enc")]);
    assert_eq!(store.load(&master("pw")).unwrap().len(), 5);
}

#[cfg(unix)]
#[test]
fn test_vault_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let store = test_store(dir.path().join("passwords.enc"));
    store.initialize(&master("pw")).unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
