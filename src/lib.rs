// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! BluePay simulation core.
//!
//! A headless model of the BluePay wallet: credential registry, session
//! gate, referral ledger, in-session balance ledger, navigation stack, and
//! the gated purchase / withdrawal / validation flows. Persistence goes
//! through the [`store::KeyValueStore`] trait, backed in-memory for tests
//! or by redb on disk; timed steps go through [`sched::Scheduler`] so hosts
//! can cancel them on teardown and tests can drive them on a paused clock.

pub mod app;
pub mod config;
pub mod error;
pub mod links;
pub mod nav;
pub mod referral;
pub mod registry;
pub mod sched;
pub mod screens;
pub mod session;
pub mod store;
pub mod wallet;

pub use app::{DashboardState, Shell};
pub use config::AppConfig;
pub use error::{WalletError, WalletResult};
