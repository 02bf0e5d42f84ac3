// src/manager.rs
//! Access-control gate over the encrypted store
//!
//! Every record operation passes the session gate first: a session must
//! exist, must not have idled out, and is renewed by the operation. The
//! gate holds the proven master password, so the store itself never
//! keeps key material.

use chrono::Utc;
use tracing::{info, warn};

use crate::aliases::MasterPassword;
use crate::error::{Result, VaultError};
use crate::records::{self, CredentialRecord, RecordUpdate, VaultData};
use crate::session::{Session, SessionPolicy};
use crate::store::VaultStore;

pub struct VaultManager {
    store: VaultStore,
    policy: SessionPolicy,
    session: Option<Session>,
}

impl VaultManager {
    pub fn new(store: VaultStore) -> Self {
        Self::with_policy(store, SessionPolicy::default())
    }

    pub fn with_policy(store: VaultStore, policy: SessionPolicy) -> Self {
        Self {
            store,
            policy,
            session: None,
        }
    }

    pub fn store(&self) -> &VaultStore {
        &self.store
    }

    /// Prove the master password against the vault file and open a session
    pub fn authenticate(&mut self, master: MasterPassword) -> Result<()> {
        if let Err(err) = self.store.load(&master) {
            warn!("authentication failed");
            self.session = None;
            return Err(err);
        }
        self.session = Some(Session::open(master, Utc::now()));
        info!("vault unlocked");
        Ok(())
    }

    /// Session alive and the password still opens the store
    ///
    /// Counts as activity, so polling it keeps the session warm.
    pub fn is_authenticated(&mut self) -> bool {
        if self.touch_session().is_err() {
            return false;
        }
        match self.session_master() {
            Ok(master) => self.store.load(master).is_ok(),
            Err(_) => false,
        }
    }

    /// Drop the session; the next operation requires authentication
    pub fn lock(&mut self) {
        if self.session.take().is_some() {
            info!("vault locked");
        }
    }

    pub fn add_record(&mut self, name: &str, record: CredentialRecord) -> Result<()> {
        self.touch_session()?;
        records::validate_new(name, &record)?;
        let master = self.session_master()?;
        let mut data = self.store.load(master)?;
        if data.contains_key(name) {
            return Err(VaultError::DuplicateRecord(name.to_string()));
        }
        data.insert(name.to_string(), record);
        self.store.save(master, &data)?;
        info!(record = name, "record added");
        Ok(())
    }

    pub fn record(&mut self, name: &str) -> Result<CredentialRecord> {
        self.touch_session()?;
        let master = self.session_master()?;
        let data = self.store.load(master)?;
        data.get(name)
            .cloned()
            .ok_or_else(|| VaultError::RecordNotFound(name.to_string()))
    }

    /// Apply a partial update; an empty patch is a validated no-op
    pub fn update_record(&mut self, name: &str, update: RecordUpdate) -> Result<()> {
        self.touch_session()?;
        let master = self.session_master()?;
        let mut data = self.store.load(master)?;
        let record = data
            .get_mut(name)
            .ok_or_else(|| VaultError::RecordNotFound(name.to_string()))?;
        if update.is_empty() {
            return Ok(());
        }
        update.apply(record);
        self.store.save(master, &data)?;
        info!(record = name, "record updated");
        Ok(())
    }

    pub fn delete_record(&mut self, name: &str) -> Result<()> {
        self.touch_session()?;
        let master = self.session_master()?;
        let mut data = self.store.load(master)?;
        if data.remove(name).is_none() {
            return Err(VaultError::RecordNotFound(name.to_string()));
        }
        self.store.save(master, &data)?;
        info!(record = name, "record deleted");
        Ok(())
    }

    /// All record names, lexicographically sorted
    pub fn record_names(&mut self) -> Result<Vec<String>> {
        self.touch_session()?;
        let master = self.session_master()?;
        let data = self.store.load(master)?;
        Ok(data.into_keys().collect())
    }

    pub fn all_records(&mut self) -> Result<VaultData> {
        self.touch_session()?;
        let master = self.session_master()?;
        self.store.load(master)
    }

    /// Insert many records in one load/save cycle
    ///
    /// Names already in the vault are skipped, never overwritten.
    /// Returns `(added, skipped)`.
    pub fn add_records(
        &mut self,
        batch: Vec<(String, CredentialRecord)>,
    ) -> Result<(usize, usize)> {
        self.touch_session()?;
        let master = self.session_master()?;
        let mut data = self.store.load(master)?;
        let mut added = 0;
        let mut skipped = 0;
        for (name, record) in batch {
            if data.contains_key(&name) {
                skipped += 1;
                continue;
            }
            records::validate_new(&name, &record)?;
            data.insert(name, record);
            added += 1;
        }
        if added > 0 {
            self.store.save(master, &data)?;
        }
        info!(added, skipped, "bulk insert finished");
        Ok((added, skipped))
    }

    /// Re-key the vault; the open session carries over to the new password
    pub fn change_master_password(&mut self, new: MasterPassword) -> Result<()> {
        self.touch_session()?;
        let data = {
            let master = self.session_master()?;
            self.store.load(master)?
        };
        self.store.save(&new, &data)?;
        self.session = Some(Session::open(new, Utc::now()));
        info!("master password changed");
        Ok(())
    }

    /// Session gate: errors when locked or idled out, slides the clock otherwise
    fn touch_session(&mut self) -> Result<()> {
        let now = Utc::now();
        let Some(session) = self.session.as_mut() else {
            return Err(VaultError::NotAuthenticated);
        };
        if session.is_expired(&self.policy, now) {
            let idle = (now - session.last_activity()).num_seconds();
            self.session = None;
            warn!(idle_secs = idle, "session expired, vault locked");
            return Err(VaultError::SessionExpired(idle));
        }
        session.touch(now);
        Ok(())
    }

    fn session_master(&self) -> Result<&MasterPassword> {
        self.session
            .as_ref()
            .map(Session::master)
            .ok_or(VaultError::NotAuthenticated)
    }
}
