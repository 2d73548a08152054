// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Credential registry.
//!
//! Registered identities live as a JSON array under one store key. Secrets
//! are stored salted-and-hashed, never in the clear, and recovery issues a
//! single-use reset token rather than revealing anything.

use base64ct::{Base64, Encoding};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::{WalletError, WalletResult};
use crate::store::{keys, KeyValueStore};

/// How long a password reset token stays valid.
const RESET_TOKEN_TTL_MINUTES: i64 = 15;

/// A pending password reset issued for one identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetRequest {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// A registered identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Unique key of the registry.
    pub email: String,
    pub display_name: String,
    /// Base64 of SHA-256(salt || secret).
    pub secret_hash: String,
    pub salt: String,
    /// Outstanding reset request, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<ResetRequest>,
}

fn hash_secret(salt: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(secret.as_bytes());
    Base64::encode_string(&hasher.finalize())
}

/// Registry over the injected persistent store.
pub struct CredentialRegistry<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> CredentialRegistry<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the identity list. Malformed persisted JSON degrades to an
    /// empty registry rather than failing the caller.
    fn load(&self) -> WalletResult<Vec<Identity>> {
        match self.store.get(keys::REGISTERED_USERS)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(identities) => Ok(identities),
                Err(_) => {
                    tracing::warn!("registered_users is malformed, resetting registry");
                    self.store.remove(keys::REGISTERED_USERS)?;
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, identities: &[Identity]) -> WalletResult<()> {
        let raw = serde_json::to_string(identities)?;
        self.store.set(keys::REGISTERED_USERS, &raw)?;
        Ok(())
    }

    /// Register a new identity. Fails with [`WalletError::AlreadyRegistered`]
    /// if the email is taken.
    pub fn register(
        &self,
        email: &str,
        display_name: &str,
        secret: &str,
    ) -> WalletResult<Identity> {
        let mut identities = self.load()?;
        if identities.iter().any(|identity| identity.email == email) {
            return Err(WalletError::AlreadyRegistered);
        }

        let salt = Uuid::new_v4().to_string();
        let identity = Identity {
            email: email.to_string(),
            display_name: display_name.to_string(),
            secret_hash: hash_secret(&salt, secret),
            salt,
            reset: None,
        };
        identities.push(identity.clone());
        self.save(&identities)?;

        tracing::info!(email, "identity registered");
        Ok(identity)
    }

    /// Verify credentials. Unknown email and wrong secret produce the same
    /// [`WalletError::InvalidCredentials`].
    pub fn login(&self, email: &str, secret: &str) -> WalletResult<Identity> {
        let identities = self.load()?;
        identities
            .into_iter()
            .find(|identity| {
                identity.email == email
                    && identity.secret_hash == hash_secret(&identity.salt, secret)
            })
            .ok_or(WalletError::InvalidCredentials)
    }

    /// Start secret recovery: attach a time-limited single-use token to the
    /// identity and return it. In a real product the token would be
    /// delivered out of band; here the caller surfaces it directly.
    pub fn issue_reset_token(&self, email: &str) -> WalletResult<String> {
        let mut identities = self.load()?;
        let identity = identities
            .iter_mut()
            .find(|identity| identity.email == email)
            .ok_or(WalletError::InvalidCredentials)?;

        let token = Uuid::new_v4().to_string();
        identity.reset = Some(ResetRequest {
            token: token.clone(),
            expires_at: Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
        });
        self.save(&identities)?;

        tracing::info!(email, "reset token issued");
        Ok(token)
    }

    /// Complete secret recovery. Consumes the token whether or not it
    /// matched, so a token can never be replayed.
    pub fn reset_secret(
        &self,
        email: &str,
        token: &str,
        new_secret: &str,
    ) -> WalletResult<()> {
        let mut identities = self.load()?;
        let identity = identities
            .iter_mut()
            .find(|identity| identity.email == email)
            .ok_or(WalletError::InvalidResetToken)?;

        let valid = identity
            .reset
            .as_ref()
            .is_some_and(|reset| reset.token == token && reset.expires_at > Utc::now());
        identity.reset = None;

        if !valid {
            self.save(&identities)?;
            return Err(WalletError::InvalidResetToken);
        }

        identity.salt = Uuid::new_v4().to_string();
        identity.secret_hash = hash_secret(&identity.salt, new_secret);
        self.save(&identities)?;

        tracing::info!(email, "secret reset");
        Ok(())
    }
}
