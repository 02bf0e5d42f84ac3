// src/records.rs
//! Credential records and the decrypted vault payload

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

/// Decrypted vault contents, keyed by record name
///
/// A `BTreeMap` keeps listings sorted without a separate index.
pub type VaultData = BTreeMap<String, CredentialRecord>;

/// One stored credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub account: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub remark: String,
}

/// Partial update; only `Some` fields are applied
#[derive(Debug, Clone, Default)]
pub struct RecordUpdate {
    pub account: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub remark: Option<String>,
}

impl RecordUpdate {
    pub fn is_empty(&self) -> bool {
        self.account.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.remark.is_none()
    }

    pub fn apply(self, record: &mut CredentialRecord) {
        if let Some(account) = self.account {
            record.account = account;
        }
        if let Some(password) = self.password {
            record.password = password;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(phone) = self.phone {
            record.phone = phone;
        }
        if let Some(remark) = self.remark {
            record.remark = remark;
        }
    }
}

/// Validate a record about to be inserted under `name`
///
/// Name, account, and password are required; contact fields are not.
/// Passwords are taken verbatim, so whitespace-only ones pass.
pub fn validate_new(name: &str, record: &CredentialRecord) -> Result<()> {
    if name.trim().is_empty() {
        return Err(VaultError::InvalidRecord(
            "record name must not be empty".into(),
        ));
    }
    if record.account.trim().is_empty() {
        return Err(VaultError::InvalidRecord(format!(
            "'{name}': account must not be empty"
        )));
    }
    if record.password.is_empty() {
        return Err(VaultError::InvalidRecord(format!(
            "'{name}': password must not be empty"
        )));
    }
    Ok(())
}
