// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Data bundle purchase flow.
//!
//! Same shape as the airtime flow but priced from a fixed bundle catalog
//! and gated by the data BPC code.

use crate::config::AppConfig;
use crate::error::{WalletError, WalletResult};
use crate::sched::Scheduler;
use crate::wallet::TxKind;

use super::{DebitNote, Network, StepResult};

/// A purchasable bundle: label and price in naira.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataBundle {
    pub name: &'static str,
    pub price: u64,
}

/// Catalog offered on the data form, smallest first.
pub const DATA_BUNDLES: [DataBundle; 5] = [
    DataBundle { name: "1GB (30 Days)", price: 500 },
    DataBundle { name: "2GB (30 Days)", price: 1_000 },
    DataBundle { name: "5GB (30 Days)", price: 2_000 },
    DataBundle { name: "10GB (30 Days)", price: 3_500 },
    DataBundle { name: "20GB (30 Days)", price: 5_000 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataState {
    Form,
    Processing,
    Success,
}

#[derive(Debug, Clone)]
pub struct DataForm {
    pub network: Network,
    pub phone_number: String,
    pub bundle: DataBundle,
    pub gate_code: String,
}

#[derive(Debug)]
pub struct DataFlow {
    state: DataState,
}

impl Default for DataFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFlow {
    pub fn new() -> Self {
        Self {
            state: DataState::Form,
        }
    }

    pub fn state(&self) -> DataState {
        self.state
    }

    pub async fn submit(
        &mut self,
        form: &DataForm,
        config: &AppConfig,
        sched: &Scheduler,
    ) -> WalletResult<StepResult<DebitNote>> {
        if form.phone_number.is_empty() {
            return Err(WalletError::MissingField {
                field: "phone number",
            });
        }
        if form.gate_code != config.gate_codes.data {
            tracing::debug!("data purchase rejected: wrong gate code");
            return Err(WalletError::InvalidGateCode);
        }

        self.state = DataState::Processing;
        if !sched.step(config.delays.purchase_processing).await {
            return Ok(StepResult::Cancelled);
        }

        self.state = DataState::Success;
        Ok(StepResult::Done(DebitNote {
            amount: form.bundle.price,
            kind: TxKind::Data,
            description: format!("{} Data - {}", form.network, form.bundle.name),
        }))
    }

    pub async fn auto_return(&mut self, config: &AppConfig, sched: &Scheduler) -> bool {
        debug_assert_eq!(self.state, DataState::Success);
        sched.step(config.delays.success_auto_return).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(gate_code: &str, bundle: DataBundle) -> DataForm {
        DataForm {
            network: Network::Glo,
            phone_number: "08087654321".to_string(),
            bundle,
            gate_code: gate_code.to_string(),
        }
    }

    #[test]
    fn catalog_prices_ascend_with_size() {
        for pair in DATA_BUNDLES.windows(2) {
            assert!(pair[0].price < pair[1].price);
        }
        assert_eq!(DATA_BUNDLES[0].price, 500);
        assert_eq!(DATA_BUNDLES[4].price, 5_000);
    }

    #[tokio::test(start_paused = true)]
    async fn bundle_price_becomes_the_debit_amount() {
        let config = AppConfig::default();
        let sched = Scheduler::new();
        let mut flow = DataFlow::new();

        let result = flow
            .submit(
                &form("BPC-2008@Code205OT", DATA_BUNDLES[1]),
                &config,
                &sched,
            )
            .await
            .unwrap();
        let StepResult::Done(note) = result else {
            panic!("expected a completed purchase");
        };
        assert_eq!(note.amount, 1_000);
        assert_eq!(note.kind, TxKind::Data);
        assert_eq!(note.description, "Glo Data - 2GB (30 Days)");
    }

    #[tokio::test(start_paused = true)]
    async fn airtime_code_does_not_unlock_the_data_flow() {
        let config = AppConfig::default();
        let sched = Scheduler::new();
        let mut flow = DataFlow::new();

        let err = flow
            .submit(&form("BPC-@37657-OQ", DATA_BUNDLES[0]), &config, &sched)
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::InvalidGateCode));
        assert_eq!(flow.state(), DataState::Form);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_processing_emits_no_note() {
        let config = AppConfig::default();
        let sched = Scheduler::new();
        sched.cancel();

        let mut flow = DataFlow::new();
        let result = flow
            .submit(
                &form("BPC-2008@Code205OT", DATA_BUNDLES[0]),
                &config,
                &sched,
            )
            .await
            .unwrap();
        assert_eq!(result, StepResult::Cancelled);
    }
}
