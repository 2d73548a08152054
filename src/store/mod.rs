// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! # Persistent Key-Value Store
//!
//! The simulation core never talks to a server; everything that survives a
//! restart lives in a string-keyed store with JSON-encoded values, shaped
//! like the origin-scoped storage of a browser host. The store is a
//! capability handed to each component at construction so that tests can
//! substitute [`MemoryStore`] for the embedded [`RedbStore`].
//!
//! ## Key Layout
//!
//! | key | contents |
//! |-----|----------|
//! | `registered_users` | JSON array of identity records |
//! | `session` | JSON session record of the signed-in user |
//! | `referrals_<code>` | JSON referral ledger entry for one referrer |
//! | `pending_referral_credits` | JSON array of unclaimed referral bonuses |
//! | `pending_signup_ref` | referral code captured from a `ref=` parameter |
//! | `last_balance_add_<email>` | RFC 3339 timestamp of the last daily reward |

pub mod keys;
pub mod memory;
pub mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("redb database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Synchronous string-keyed persistence capability.
///
/// Modeled on browser local storage: flat namespace, string values, no
/// expiry. Implementations must make each call atomic from the caller's
/// perspective; read-modify-write sequences are serialized by the
/// single-threaded shell above this layer.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
