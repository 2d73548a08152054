// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Demo driver: walks one scripted BluePay session against a real store.
//!
//! Set `DATA_DIR` to persist state in an embedded database across runs;
//! without it the session runs against an in-memory store.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bluepay_core::app::Shell;
use bluepay_core::config::{AppConfig, DATA_DIR_ENV};
use bluepay_core::error::{WalletError, WalletResult};
use bluepay_core::nav::{NullSink, Screen};
use bluepay_core::sched::Scheduler;
use bluepay_core::screens::airtime::{AirtimeFlow, AirtimeForm};
use bluepay_core::screens::{Network, StepResult};
use bluepay_core::store::{KeyValueStore, MemoryStore, RedbStore};
use bluepay_core::{links, referral};

#[tokio::main]
async fn main() -> WalletResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let store: Box<dyn KeyValueStore> = match std::env::var(DATA_DIR_ENV) {
        Ok(dir) => {
            let path = PathBuf::from(dir).join("bluepay.redb");
            info!(path = %path.display(), "opening embedded database");
            Box::new(RedbStore::open(&path)?)
        }
        Err(_) => {
            info!("no {DATA_DIR_ENV} set, using in-memory store");
            Box::new(MemoryStore::new())
        }
    };

    run_session(store.as_ref()).await?;
    Ok(())
}

async fn run_session(store: &dyn KeyValueStore) -> WalletResult<()> {
    let config = AppConfig::default();
    let sched = Scheduler::new();
    let mut shell = Shell::new(store, config.clone());

    let email = "demo@bluepay.example";
    if !shell.restore(Box::new(NullSink))? {
        let signed_up = match shell
            .sign_up(email, "Demo User", "correct-horse", &sched, Box::new(NullSink))
            .await
        {
            Ok(done) => done,
            Err(WalletError::AlreadyRegistered) => {
                shell.sign_in(email, "correct-horse", Box::new(NullSink))?;
                true
            }
            Err(other) => return Err(other),
        };
        if !signed_up {
            return Ok(());
        }
    }

    {
        let dashboard = shell.dashboard().unwrap();
        info!(
            email = dashboard.session.email,
            balance = dashboard.ledger.balance(),
            "session active"
        );
        info!(link = %links::referral_link(&dashboard.referral_code), "share to earn");
    }

    // One gated airtime purchase end to end
    let mut flow = AirtimeFlow::new();
    shell.dashboard_mut().unwrap().nav.push(Screen::Airtime);

    let form = AirtimeForm {
        network: Network::Mtn,
        phone_number: "08012345678".to_string(),
        amount: 500,
        gate_code: config.gate_codes.airtime.clone(),
    };
    match flow.submit(&form, &config, &sched).await? {
        StepResult::Done(note) => {
            let dashboard = shell.dashboard_mut().unwrap();
            let tx = dashboard.apply_debit(&note)?;
            info!(id = %tx.id, amount = tx.amount, "airtime purchased");
            if flow.auto_return(&config, &sched).await {
                dashboard.nav.reset_to_root();
            }
        }
        StepResult::Cancelled => info!("purchase cancelled during teardown"),
    }

    let dashboard = shell.dashboard().unwrap();
    info!(
        balance = dashboard.ledger.balance(),
        transactions = dashboard.ledger.transactions().len(),
        code = %referral::derive_code(&dashboard.session.email),
        "session complete"
    );
    Ok(())
}
