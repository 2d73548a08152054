// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! In-memory balance and transaction ledger.
//!
//! The ledger lives inside the dashboard shell and does not survive a
//! restart. Its one invariant: the balance is never mutated without exactly
//! one matching transaction record, newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{WalletError, WalletResult};

/// Transaction status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Pending,
    Failed,
}

/// What a transaction was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Withdrawal,
    Deposit,
    Airtime,
    Data,
    Bpc,
}

/// One ledger line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub kind: TxKind,
    pub amount: u64,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub status: TxStatus,
}

/// The signed-in user's live balance and history. Newest transaction first.
#[derive(Debug)]
pub struct Ledger {
    balance: u64,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(initial_balance: u64) -> Self {
        Self {
            balance: initial_balance,
            transactions: Vec::new(),
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn record(&mut self, kind: TxKind, amount: u64, description: &str) -> &Transaction {
        self.transactions.insert(
            0,
            Transaction {
                id: Uuid::new_v4().to_string(),
                kind,
                amount,
                description: description.to_string(),
                timestamp: Utc::now(),
                status: TxStatus::Success,
            },
        );
        &self.transactions[0]
    }

    /// Debit the balance, appending exactly one successful transaction.
    /// A debit above the live balance is rejected and appends nothing.
    pub fn debit(
        &mut self,
        amount: u64,
        kind: TxKind,
        description: &str,
    ) -> WalletResult<&Transaction> {
        if amount > self.balance {
            return Err(WalletError::InsufficientFunds { amount });
        }
        self.balance -= amount;
        tracing::info!(amount, kind = ?kind, balance = self.balance, "balance debited");
        Ok(self.record(kind, amount, description))
    }

    /// Credit the balance, appending exactly one successful transaction.
    pub fn credit(
        &mut self,
        amount: u64,
        kind: TxKind,
        description: &str,
    ) -> &Transaction {
        self.balance += amount;
        tracing::info!(amount, kind = ?kind, balance = self.balance, "balance credited");
        self.record(kind, amount, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_decrements_balance_and_appends_one_record() {
        let mut ledger = Ledger::new(200_000);
        let tx = ledger
            .debit(500, TxKind::Airtime, "MTN Airtime - 08012345678")
            .unwrap();
        assert_eq!(tx.amount, 500);
        assert_eq!(tx.status, TxStatus::Success);

        assert_eq!(ledger.balance(), 199_500);
        assert_eq!(ledger.transactions().len(), 1);
    }

    #[test]
    fn sequence_of_debits_conserves_the_books() {
        let mut ledger = Ledger::new(200_000);
        let debits = [
            (500_u64, TxKind::Airtime, "MTN Airtime - 08012345678"),
            (1_000, TxKind::Data, "Glo Data - 2GB (30 Days)"),
            (20_000, TxKind::Withdrawal, "Access Bank - 0123456789"),
        ];
        for (amount, kind, description) in debits {
            ledger.debit(amount, kind, description).unwrap();
        }

        assert_eq!(ledger.balance(), 200_000 - 500 - 1_000 - 20_000);
        assert_eq!(ledger.transactions().len(), 3);
        // Newest first
        assert_eq!(ledger.transactions()[0].kind, TxKind::Withdrawal);
        assert_eq!(ledger.transactions()[2].kind, TxKind::Airtime);
    }

    #[test]
    fn overdraft_rejected_without_a_record() {
        let mut ledger = Ledger::new(100);
        let err = ledger.debit(500, TxKind::Airtime, "too much").unwrap_err();
        assert!(matches!(err, WalletError::InsufficientFunds { amount: 500 }));
        assert_eq!(ledger.balance(), 100);
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn credit_increments_balance_with_a_deposit_record() {
        let mut ledger = Ledger::new(0);
        ledger.credit(10_000, TxKind::Deposit, "Referral bonus");
        assert_eq!(ledger.balance(), 10_000);
        assert_eq!(ledger.transactions()[0].kind, TxKind::Deposit);
    }

    #[test]
    fn transaction_ids_are_unique() {
        let mut ledger = Ledger::new(1_000);
        ledger.debit(1, TxKind::Airtime, "a").unwrap();
        ledger.debit(1, TxKind::Airtime, "b").unwrap();
        let txs = ledger.transactions();
        assert_ne!(txs[0].id, txs[1].id);
    }
}
