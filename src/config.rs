// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! # Runtime Configuration
//!
//! All "business" literals of the simulation live here: gate codes, fixed
//! amounts, and the step delays that stand in for network latency. Gate
//! codes are configuration data, not secrets; nothing protects them and
//! nothing should.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Directory holding the embedded database file | in-memory store |
//! | `RUST_LOG` | Log level filter | `info` |

use std::time::Duration;

/// Environment variable naming the directory for the embedded database.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Gate codes unlocking the simulated success paths. Each feature checks an
/// exact string match before its flow may leave the form state.
#[derive(Debug, Clone)]
pub struct GateCodes {
    pub airtime: String,
    pub data: String,
    pub withdrawal: String,
}

impl Default for GateCodes {
    fn default() -> Self {
        Self {
            airtime: "BPC-@37657-OQ".to_string(),
            data: "BPC-2008@Code205OT".to_string(),
            // The withdrawal form shares the airtime code family.
            withdrawal: "BPC-@37657-OQ".to_string(),
        }
    }
}

/// Fixed delays driving the simulated asynchronous steps.
#[derive(Debug, Clone)]
pub struct StepDelays {
    /// Airtime/data purchase processing spinner.
    pub purchase_processing: Duration,
    /// Auto-return to the dashboard after a success screen.
    pub success_auto_return: Duration,
    /// Account validation: form submit to payment screen.
    pub validation_preparing: Duration,
    /// Account validation: payment confirmation to outcome.
    pub validation_processing: Duration,
    /// BPC purchase: form submit to account details.
    pub bpc_preparing: Duration,
    /// BPC purchase: transfer confirmation to outcome.
    pub bpc_verifying: Duration,
    /// Account creation spinner during sign-up.
    pub registration: Duration,
}

impl Default for StepDelays {
    fn default() -> Self {
        Self {
            purchase_processing: Duration::from_secs(2),
            success_auto_return: Duration::from_secs(3),
            validation_preparing: Duration::from_secs(4),
            validation_processing: Duration::from_secs(8),
            bpc_preparing: Duration::from_secs(6),
            bpc_verifying: Duration::from_secs(7),
            registration: Duration::from_secs(3),
        }
    }
}

/// Top-level configuration handed to the shell at construction.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Balance granted when a dashboard is first built, in naira.
    pub initial_balance: u64,
    /// Amount credited once per calendar day on session restore.
    pub daily_reward: u64,
    /// Bonus credited to a referrer per successful signup.
    pub referral_bonus: u64,
    /// Fee shown on the account validation payment screen.
    pub validation_fee: u64,
    /// Fixed price of a BPC code purchase.
    pub bpc_price: u64,
    pub gate_codes: GateCodes,
    pub delays: StepDelays,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_balance: 200_000,
            daily_reward: 200_000,
            referral_bonus: 10_000,
            validation_fee: 20_700,
            bpc_price: 5_200,
            gate_codes: GateCodes::default(),
            delays: StepDelays::default(),
        }
    }
}
