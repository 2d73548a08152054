// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Session persistence.
//!
//! The session manager is the sole writer of the `session` store key. It
//! persists the signed-in user so a restart restores the same session
//! without re-authentication, and it treats corrupt persisted JSON as an
//! absent session, clearing it instead of failing the caller.

use serde::{Deserialize, Serialize};

use crate::error::WalletResult;
use crate::registry::Identity;
use crate::store::{keys, KeyValueStore};

/// The signed-in user as persisted across restarts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub display_name: String,
    /// Opaque reference to a stored avatar, if one was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
}

pub struct SessionManager<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SessionManager<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Restore the persisted session, if any. Malformed data is cleared and
    /// reported as no session.
    pub fn restore(&self) -> WalletResult<Option<Session>> {
        let Some(raw) = self.store.get(keys::SESSION)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(_) => {
                tracing::warn!("persisted session is malformed, clearing it");
                self.store.remove(keys::SESSION)?;
                Ok(None)
            }
        }
    }

    /// Create and persist a session from a successful registry result.
    pub fn start(&self, identity: &Identity) -> WalletResult<Session> {
        let session = Session {
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            avatar_ref: None,
        };
        self.persist(&session)?;
        tracing::info!(email = %session.email, "session started");
        Ok(session)
    }

    /// Persist a changed avatar reference.
    pub fn update_avatar(
        &self,
        session: &Session,
        avatar_ref: Option<String>,
    ) -> WalletResult<Session> {
        let updated = Session {
            avatar_ref,
            ..session.clone()
        };
        self.persist(&updated)?;
        Ok(updated)
    }

    /// End the session. The caller resets all dependent in-memory state.
    pub fn end(&self) -> WalletResult<()> {
        self.store.remove(keys::SESSION)?;
        tracing::info!("session ended");
        Ok(())
    }

    fn persist(&self, session: &Session) -> WalletResult<()> {
        let raw = serde_json::to_string(session)?;
        self.store.set(keys::SESSION, &raw)?;
        Ok(())
    }
}
