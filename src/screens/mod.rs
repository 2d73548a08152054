// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! # Screen State Machines
//!
//! One module per feature flow. Each flow is an independent finite-state
//! machine driven by user submission and fixed-delay simulated steps on a
//! cancellable [`Scheduler`](crate::sched::Scheduler):
//!
//! - [`airtime`] / [`data`] / [`withdraw`]: gate-coded purchase flows that
//!   end in a success screen and exactly one [`DebitNote`].
//! - [`validation`] / [`bpc`]: multi-step payment flows that always end on
//!   a failure screen and never debit.
//!
//! Flows never touch the ledger themselves; a completed flow hands its
//! [`DebitNote`] to the shell, the sole mutator of balance and history.

pub mod airtime;
pub mod bpc;
pub mod data;
pub mod validation;
pub mod withdraw;

use crate::wallet::TxKind;

/// The one balance-debit notification a successful flow emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebitNote {
    pub amount: u64,
    pub kind: TxKind,
    pub description: String,
}

/// Result of driving a flow step that may be torn down mid-wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult<T> {
    /// The step ran to completion.
    Done(T),
    /// The owning screen was torn down; no further state change happened.
    Cancelled,
}

/// Mobile network operators offered on the airtime and data forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mtn,
    Airtel,
    Glo,
    NineMobile,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Mtn,
        Network::Airtel,
        Network::Glo,
        Network::NineMobile,
    ];
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Network::Mtn => "MTN",
            Network::Airtel => "Airtel",
            Network::Glo => "Glo",
            Network::NineMobile => "9Mobile",
        };
        f.write_str(name)
    }
}

/// Fixed payee shown on a manual bank-transfer screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPayee {
    pub bank: &'static str,
    pub account_number: &'static str,
    pub account_name: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_names_match_the_operator_brands() {
        let names: Vec<String> = Network::ALL.iter().map(Network::to_string).collect();
        assert_eq!(names, ["MTN", "Airtel", "Glo", "9Mobile"]);
    }
}
