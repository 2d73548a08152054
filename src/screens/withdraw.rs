// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Bank withdrawal flow.
//!
//! Transfer-to-bank form over the Nigerian bank roster, gated like the
//! purchase flows. A completed withdrawal debits the requested amount with
//! a `"<bank> - <account>"` description.

use crate::config::AppConfig;
use crate::error::{WalletError, WalletResult};
use crate::sched::Scheduler;
use crate::wallet::TxKind;

use super::{DebitNote, StepResult};

/// Banks offered on the withdrawal form, as listed by the product.
pub const NIGERIAN_BANKS: [&str; 65] = [
    "Access Bank",
    "Ecobank Nigeria",
    "Fidelity Bank",
    "First Bank of Nigeria",
    "Guaranty Trust Bank",
    "Heritage Bank",
    "Keystone Bank",
    "Polaris Bank",
    "Providus Bank",
    "Stanbic IBTC Bank",
    "Standard Chartered Bank",
    "Sterling Bank",
    "Union Bank of Nigeria",
    "United Bank for Africa",
    "Unity Bank",
    "Wema Bank",
    "Zenith Bank",
    "Jaiz Bank",
    "SunTrust Bank",
    "Titan Trust Bank",
    "Globus Bank",
    "VFD Microfinance Bank",
    "Sparkle Microfinance Bank",
    "NPF Microfinance Bank",
    "LAPO Microfinance Bank",
    "AB Microfinance Bank",
    "Accion Microfinance Bank",
    "Advans La Fayette Microfinance Bank",
    "Amju Unique Microfinance Bank",
    "Bainescredit Microfinance Bank",
    "CEMCS Microfinance Bank",
    "Covenant Microfinance Bank",
    "Eyowo",
    "Fcmb Microfinance Bank",
    "Fina Trust Microfinance Bank",
    "Full Range Microfinance Bank",
    "Grooming Microfinance Bank",
    "Hackman Microfinance Bank",
    "Hasal Microfinance Bank",
    "Ibile Microfinance Bank",
    "Ikoyi Osun Microfinance Bank",
    "Imowo Microfinance Bank",
    "Infiniti Microfinance Bank",
    "Kredi Money Microfinance Bank",
    "Lagos Building Investment Company",
    "Mainstreet Microfinance Bank",
    "Mkobo Microfinance Bank",
    "OPay",
    "PalmPay",
    "Parallex Bank",
    "Parkway - ReadyCash",
    "Petra Microfinance Bank",
    "QuickFund Microfinance Bank",
    "Rephidim Microfinance Bank",
    "Safe Haven Microfinance Bank",
    "Seedvest Microfinance Bank",
    "Stellas Microfinance Bank",
    "TagPay",
    "Tangerine Money",
    "TCF Microfinance Bank",
    "Uhuru Microfinance Bank",
    "Unaab Microfinance Bank",
    "Unical Microfinance Bank",
    "Vine Microfinance Bank",
    "Xenith Microfinance Bank",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawState {
    Form,
    Processing,
    Success,
}

#[derive(Debug, Clone)]
pub struct WithdrawForm {
    pub account_number: String,
    pub bank: String,
    pub account_name: String,
    pub amount: u64,
    pub gate_code: String,
}

#[derive(Debug)]
pub struct WithdrawFlow {
    state: WithdrawState,
}

impl Default for WithdrawFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl WithdrawFlow {
    pub fn new() -> Self {
        Self {
            state: WithdrawState::Form,
        }
    }

    pub fn state(&self) -> WithdrawState {
        self.state
    }

    pub async fn submit(
        &mut self,
        form: &WithdrawForm,
        config: &AppConfig,
        sched: &Scheduler,
    ) -> WalletResult<StepResult<DebitNote>> {
        if form.account_number.is_empty() {
            return Err(WalletError::MissingField {
                field: "account number",
            });
        }
        if form.bank.is_empty() {
            return Err(WalletError::MissingField { field: "bank" });
        }
        if form.amount == 0 {
            return Err(WalletError::MissingField { field: "amount" });
        }
        if form.gate_code != config.gate_codes.withdrawal {
            tracing::debug!("withdrawal rejected: wrong gate code");
            return Err(WalletError::InvalidGateCode);
        }

        self.state = WithdrawState::Processing;
        if !sched.step(config.delays.purchase_processing).await {
            return Ok(StepResult::Cancelled);
        }

        self.state = WithdrawState::Success;
        Ok(StepResult::Done(DebitNote {
            amount: form.amount,
            kind: TxKind::Withdrawal,
            description: format!("{} - {}", form.bank, form.account_number),
        }))
    }

    pub async fn auto_return(&mut self, config: &AppConfig, sched: &Scheduler) -> bool {
        debug_assert_eq!(self.state, WithdrawState::Success);
        sched.step(config.delays.success_auto_return).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(gate_code: &str, amount: u64) -> WithdrawForm {
        WithdrawForm {
            account_number: "0123456789".to_string(),
            bank: "Access Bank".to_string(),
            account_name: "Ada Obi".to_string(),
            amount,
            gate_code: gate_code.to_string(),
        }
    }

    #[test]
    fn roster_covers_the_commercial_banks() {
        assert!(NIGERIAN_BANKS.contains(&"Zenith Bank"));
        assert!(NIGERIAN_BANKS.contains(&"OPay"));
        assert!(NIGERIAN_BANKS.contains(&"Xenith Microfinance Bank"));
        assert_eq!(NIGERIAN_BANKS.len(), 65);
    }

    #[tokio::test(start_paused = true)]
    async fn completed_withdrawal_notes_bank_and_account() {
        let config = AppConfig::default();
        let sched = Scheduler::new();
        let mut flow = WithdrawFlow::new();

        let result = flow
            .submit(&form("BPC-@37657-OQ", 20_000), &config, &sched)
            .await
            .unwrap();
        let StepResult::Done(note) = result else {
            panic!("expected a completed withdrawal");
        };
        assert_eq!(note.amount, 20_000);
        assert_eq!(note.kind, TxKind::Withdrawal);
        assert_eq!(note.description, "Access Bank - 0123456789");
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_gate_code_keeps_the_form_state() {
        let config = AppConfig::default();
        let sched = Scheduler::new();
        let mut flow = WithdrawFlow::new();

        let err = flow
            .submit(&form("nope", 20_000), &config, &sched)
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::InvalidGateCode));
        assert_eq!(flow.state(), WithdrawState::Form);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_account_number_is_reported_as_missing() {
        let config = AppConfig::default();
        let sched = Scheduler::new();
        let mut flow = WithdrawFlow::new();

        let mut bad = form("BPC-@37657-OQ", 20_000);
        bad.account_number.clear();
        let err = flow.submit(&bad, &config, &sched).await.unwrap_err();
        assert!(matches!(
            err,
            WalletError::MissingField {
                field: "account number"
            }
        ));
    }
}
