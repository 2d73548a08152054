// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Embedded persistent store backed by redb (pure Rust, ACID).
//!
//! A single `kv` table holds every key the simulation persists. One value
//! per key, string to string, keeping the flat namespace of the
//! [`KeyValueStore`] trait.

use std::path::Path;

use redb::{Database, ReadableDatabase, TableDefinition};

use super::{KeyValueStore, StoreResult};

/// The only table: key → JSON-encoded value.
const KV: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Durable store for the simulation. Survives restarts.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let db = Database::create(path)?;

        // Pre-create the table so read transactions never fail on a fresh file
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
