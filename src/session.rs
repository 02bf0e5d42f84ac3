// src/session.rs
//! Idle-timeout sessions for the access-control gate
//!
//! Expiry takes the clock as a parameter, so tests never need to sleep.

use chrono::{DateTime, Duration, Utc};

use crate::aliases::MasterPassword;
use crate::consts::DEFAULT_SESSION_TIMEOUT_SECS;

/// How long a session may sit idle before it expires
#[derive(Debug, Clone, Copy)]
pub struct SessionPolicy {
    pub idle_timeout: Duration,
}

impl SessionPolicy {
    pub fn from_secs(secs: i64) -> Self {
        Self {
            idle_timeout: Duration::seconds(secs),
        }
    }
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self::from_secs(DEFAULT_SESSION_TIMEOUT_SECS)
    }
}

/// An open unlock: the proven master password plus the idle clock
pub struct Session {
    master: MasterPassword,
    last_activity: DateTime<Utc>,
}

impl Session {
    pub fn open(master: MasterPassword, now: DateTime<Utc>) -> Self {
        Self {
            master,
            last_activity: now,
        }
    }

    pub fn master(&self) -> &MasterPassword {
        &self.master
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    /// True once the idle window has fully elapsed
    pub fn is_expired(&self, policy: &SessionPolicy, now: DateTime<Utc>) -> bool {
        now - self.last_activity > policy.idle_timeout
    }

    /// Sliding renewal; every authorized operation resets the clock
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_activity = now;
    }
}
