// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Airtime purchase flow.
//!
//! `Form -> Processing -> Success`, gated by the airtime BPC code. A wrong
//! code surfaces [`WalletError::InvalidGateCode`] and leaves the flow on the
//! form; a cancelled processing step leaves no state change behind.

use crate::config::AppConfig;
use crate::error::{WalletError, WalletResult};
use crate::sched::Scheduler;
use crate::wallet::TxKind;

use super::{DebitNote, Network, StepResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirtimeState {
    Form,
    Processing,
    Success,
}

/// What the user typed into the airtime form.
#[derive(Debug, Clone)]
pub struct AirtimeForm {
    pub network: Network,
    pub phone_number: String,
    pub amount: u64,
    pub gate_code: String,
}

#[derive(Debug)]
pub struct AirtimeFlow {
    state: AirtimeState,
}

impl Default for AirtimeFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AirtimeFlow {
    pub fn new() -> Self {
        Self {
            state: AirtimeState::Form,
        }
    }

    pub fn state(&self) -> AirtimeState {
        self.state
    }

    /// Submit the form. Validation is superficial by design: required
    /// fields present and an exact gate-code match.
    pub async fn submit(
        &mut self,
        form: &AirtimeForm,
        config: &AppConfig,
        sched: &Scheduler,
    ) -> WalletResult<StepResult<DebitNote>> {
        if form.phone_number.is_empty() {
            return Err(WalletError::MissingField {
                field: "phone number",
            });
        }
        if form.amount == 0 {
            return Err(WalletError::MissingField { field: "amount" });
        }
        if form.gate_code != config.gate_codes.airtime {
            tracing::debug!("airtime purchase rejected: wrong gate code");
            return Err(WalletError::InvalidGateCode);
        }

        self.state = AirtimeState::Processing;
        if !sched.step(config.delays.purchase_processing).await {
            return Ok(StepResult::Cancelled);
        }

        self.state = AirtimeState::Success;
        Ok(StepResult::Done(DebitNote {
            amount: form.amount,
            kind: TxKind::Airtime,
            description: format!("{} Airtime - {}", form.network, form.phone_number),
        }))
    }

    /// Hold the success screen for its fixed delay, then signal the shell
    /// to return to the dashboard. `false` means the screen was torn down.
    pub async fn auto_return(&mut self, config: &AppConfig, sched: &Scheduler) -> bool {
        debug_assert_eq!(self.state, AirtimeState::Success);
        sched.step(config.delays.success_auto_return).await
    }
}
