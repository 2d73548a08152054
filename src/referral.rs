// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Referral ledger.
//!
//! Each referrer has one aggregate entry keyed by a short code derived from
//! their email. Crediting is idempotent per referred email, and bonuses are
//! staged on a pending-credit queue that the referrer's next session drains
//! exactly once into the live balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{WalletError, WalletResult};
use crate::store::{keys, KeyValueStore};

/// Length of a referral code.
const CODE_LEN: usize = 8;

/// Derive the stable referral code for an email: the first eight characters
/// of its standard base64 encoding. Deterministic, so the same account
/// always shares the same code.
pub fn derive_code(email: &str) -> String {
    use base64ct::{Base64, Encoding};
    Base64::encode_string(email.as_bytes())
        .chars()
        .take(CODE_LEN)
        .collect()
}

/// Aggregate record for one referrer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferralEntry {
    pub count: u64,
    pub total_earned: u64,
    pub referred_emails: Vec<String>,
}

/// Read-only projection for the earn-more screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferralStats {
    pub count: u64,
    pub total_earned: u64,
}

/// A bonus recorded but not yet merged into the referrer's balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingCredit {
    pub referral_code: String,
    pub amount: u64,
    pub timestamp: DateTime<Utc>,
}

pub struct ReferralLedger<'a> {
    store: &'a dyn KeyValueStore,
    bonus: u64,
}

impl<'a> ReferralLedger<'a> {
    pub fn new(store: &'a dyn KeyValueStore, bonus: u64) -> Self {
        Self { store, bonus }
    }

    fn load_entry(&self, code: &str) -> WalletResult<ReferralEntry> {
        let key = keys::referrals(code);
        match self.store.get(&key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entry) => Ok(entry),
                Err(_) => {
                    tracing::warn!(code, "referral entry is malformed, resetting it");
                    self.store.remove(&key)?;
                    Ok(ReferralEntry::default())
                }
            },
            None => Ok(ReferralEntry::default()),
        }
    }

    fn save_entry(&self, code: &str, entry: &ReferralEntry) -> WalletResult<()> {
        let raw = serde_json::to_string(entry)?;
        self.store.set(&keys::referrals(code), &raw)?;
        Ok(())
    }

    fn load_queue(&self) -> WalletResult<Vec<PendingCredit>> {
        match self.store.get(keys::PENDING_REFERRAL_CREDITS)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(queue) => Ok(queue),
                Err(_) => {
                    tracing::warn!("pending credit queue is malformed, resetting it");
                    self.store.remove(keys::PENDING_REFERRAL_CREDITS)?;
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    fn save_queue(&self, queue: &[PendingCredit]) -> WalletResult<()> {
        let raw = serde_json::to_string(queue)?;
        self.store.set(keys::PENDING_REFERRAL_CREDITS, &raw)?;
        Ok(())
    }

    /// Credit a signup to `code`. Idempotent: an email already counted for
    /// this code returns [`WalletError::AlreadyCounted`] and mutates nothing.
    /// On success the bonus is also enqueued as a pending credit.
    pub fn record_referral(&self, code: &str, new_user_email: &str) -> WalletResult<()> {
        let mut entry = self.load_entry(code)?;
        if entry
            .referred_emails
            .iter()
            .any(|email| email == new_user_email)
        {
            return Err(WalletError::AlreadyCounted);
        }

        entry.count += 1;
        entry.total_earned += self.bonus;
        entry.referred_emails.push(new_user_email.to_string());
        self.save_entry(code, &entry)?;

        let mut queue = self.load_queue()?;
        queue.push(PendingCredit {
            referral_code: code.to_string(),
            amount: self.bonus,
            timestamp: Utc::now(),
        });
        self.save_queue(&queue)?;

        tracing::info!(code, referred = new_user_email, "referral credited");
        Ok(())
    }

    /// Remove and sum every pending credit for `code`. Consumed entries are
    /// gone for good; a second call returns 0 until a new referral lands.
    pub fn drain_credits_for(&self, code: &str) -> WalletResult<u64> {
        let queue = self.load_queue()?;
        if queue.is_empty() {
            return Ok(0);
        }

        let (matching, remaining): (Vec<_>, Vec<_>) = queue
            .into_iter()
            .partition(|credit| credit.referral_code == code);

        let total: u64 = matching.iter().map(|credit| credit.amount).sum();
        if total > 0 {
            self.save_queue(&remaining)?;
            tracing::info!(code, amount = total, "pending referral credits drained");
        }
        Ok(total)
    }

    /// Read-only stats for one referrer.
    pub fn stats(&self, code: &str) -> WalletResult<ReferralStats> {
        let entry = self.load_entry(code)?;
        Ok(ReferralStats {
            count: entry.count,
            total_earned: entry.total_earned,
        })
    }
}
