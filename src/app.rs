// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Application shell.
//!
//! The shell gates the authenticated area: it owns the sign-up / sign-in /
//! restore / sign-out lifecycle and, while a session is active, the
//! [`DashboardState`] holding the live ledger and navigation stack. It is
//! the sole mutator of balance and transactions; screens hand it
//! [`DebitNote`]s and never touch the ledger themselves.

use chrono::{DateTime, Utc};
use url::Url;

use crate::config::AppConfig;
use crate::error::WalletResult;
use crate::nav::{HistorySink, NavigationStack};
use crate::referral::{self, ReferralLedger};
use crate::registry::CredentialRegistry;
use crate::sched::Scheduler;
use crate::screens::DebitNote;
use crate::session::{Session, SessionManager};
use crate::store::{keys, KeyValueStore};
use crate::wallet::{Ledger, Transaction, TxKind};

/// Everything alive while a user is signed in. Reset wholesale on sign-out.
pub struct DashboardState {
    pub session: Session,
    pub referral_code: String,
    pub ledger: Ledger,
    pub nav: NavigationStack,
}

impl DashboardState {
    /// Apply one balance-debit notification from a completed flow.
    pub fn apply_debit(&mut self, note: &DebitNote) -> WalletResult<&Transaction> {
        self.ledger.debit(note.amount, note.kind, &note.description)
    }
}

/// Top-level container: session gate plus the active dashboard, if any.
pub struct Shell<'a> {
    config: AppConfig,
    store: &'a dyn KeyValueStore,
    dashboard: Option<DashboardState>,
}

impl<'a> Shell<'a> {
    pub fn new(store: &'a dyn KeyValueStore, config: AppConfig) -> Self {
        Self {
            config,
            store,
            dashboard: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The active dashboard, if a session is live.
    pub fn dashboard(&self) -> Option<&DashboardState> {
        self.dashboard.as_ref()
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut DashboardState> {
        self.dashboard.as_mut()
    }

    /// Capture a `ref=<code>` query parameter from the initial-load URL.
    /// The code is consumed exactly once at the next successful sign-up or
    /// sign-in.
    pub fn capture_referral(&self, url: &Url) -> WalletResult<()> {
        if let Some(code) = crate::links::referral_code_from(url) {
            tracing::info!(code, "referral code captured from initial URL");
            self.store.set(keys::PENDING_SIGNUP_REF, &code)?;
        }
        Ok(())
    }

    /// Consume the pending referral code, if any, crediting the referrer.
    /// A duplicate referral is a silent no-op; the code is spent either way.
    fn consume_pending_referral(&self, new_user_email: &str) -> WalletResult<()> {
        let Some(code) = self.store.get(keys::PENDING_SIGNUP_REF)? else {
            return Ok(());
        };
        self.store.remove(keys::PENDING_SIGNUP_REF)?;

        let ledger = ReferralLedger::new(self.store, self.config.referral_bonus);
        match ledger.record_referral(&code, new_user_email) {
            Ok(()) => {}
            Err(crate::error::WalletError::AlreadyCounted) => {
                tracing::debug!(code, "referral already counted, ignoring");
            }
            Err(other) => return Err(other),
        }
        Ok(())
    }

    /// Register a new account and enter the dashboard. The account-creation
    /// spinner runs on the scheduler; teardown mid-spinner leaves the user
    /// signed out.
    pub async fn sign_up(
        &mut self,
        email: &str,
        display_name: &str,
        secret: &str,
        sched: &Scheduler,
        sink: Box<dyn HistorySink + Send>,
    ) -> WalletResult<bool> {
        let registry = CredentialRegistry::new(self.store);
        let identity = registry.register(email, display_name, secret)?;

        if !sched.step(self.config.delays.registration).await {
            return Ok(false);
        }

        self.consume_pending_referral(email)?;
        let session = SessionManager::new(self.store).start(&identity)?;
        self.enter_dashboard(session, sink)?;
        Ok(true)
    }

    /// Verify credentials and enter the dashboard.
    pub fn sign_in(
        &mut self,
        email: &str,
        secret: &str,
        sink: Box<dyn HistorySink + Send>,
    ) -> WalletResult<()> {
        let registry = CredentialRegistry::new(self.store);
        let identity = registry.login(email, secret)?;

        self.consume_pending_referral(email)?;
        let session = SessionManager::new(self.store).start(&identity)?;
        self.enter_dashboard(session, sink)
    }

    /// Restore a persisted session on startup. Returns whether a dashboard
    /// was built.
    pub fn restore(&mut self, sink: Box<dyn HistorySink + Send>) -> WalletResult<bool> {
        match SessionManager::new(self.store).restore()? {
            Some(session) => {
                self.enter_dashboard(session, sink)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// End the session and reset all dependent in-memory state.
    pub fn sign_out(&mut self) -> WalletResult<()> {
        SessionManager::new(self.store).end()?;
        self.dashboard = None;
        Ok(())
    }

    fn enter_dashboard(
        &mut self,
        session: Session,
        sink: Box<dyn HistorySink + Send>,
    ) -> WalletResult<()> {
        let referral_code = referral::derive_code(&session.email);
        let mut ledger = Ledger::new(self.config.initial_balance);

        // Referral bonuses earned while signed out land as deposits now.
        let pending = ReferralLedger::new(self.store, self.config.referral_bonus)
            .drain_credits_for(&referral_code)?;
        if pending > 0 {
            ledger.credit(pending, TxKind::Deposit, "Referral bonus");
        }

        self.apply_daily_reward(&session.email, &mut ledger)?;

        self.dashboard = Some(DashboardState {
            session,
            referral_code,
            ledger,
            nav: NavigationStack::new(sink),
        });
        Ok(())
    }

    /// Credit the daily reward at most once per calendar day. The first
    /// session only stamps the clock: the initial balance covers day one.
    fn apply_daily_reward(&self, email: &str, ledger: &mut Ledger) -> WalletResult<()> {
        let key = keys::last_balance_add(email);
        let now = Utc::now();

        let last = self
            .store
            .get(&key)?
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|stamp| stamp.with_timezone(&Utc));

        match last {
            Some(stamp) if stamp.date_naive() < now.date_naive() => {
                ledger.credit(self.config.daily_reward, TxKind::Deposit, "Daily reward");
                self.store.set(&key, &now.to_rfc3339())?;
            }
            Some(_) => {}
            // Absent or unreadable stamp: start the clock without crediting
            None => self.store.set(&key, &now.to_rfc3339())?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NullSink;
    use crate::screens::DebitNote;
    use crate::store::MemoryStore;
    use crate::wallet::TxKind;

    fn sink() -> Box<dyn HistorySink + Send> {
        Box::new(NullSink)
    }

    async fn signed_up<'a>(store: &'a MemoryStore, email: &str) -> Shell<'a> {
        let mut shell = Shell::new(store, AppConfig::default());
        let sched = Scheduler::new();
        shell
            .sign_up(email, "Ada", "hunter2", &sched, sink())
            .await
            .unwrap();
        shell
    }

    #[tokio::test(start_paused = true)]
    async fn sign_up_builds_a_dashboard_with_the_initial_balance() {
        let store = MemoryStore::new();
        let shell = signed_up(&store, "ada@example.com").await;

        let dashboard = shell.dashboard().unwrap();
        assert_eq!(dashboard.ledger.balance(), 200_000);
        assert_eq!(dashboard.session.email, "ada@example.com");
        assert_eq!(dashboard.referral_code, referral::derive_code("ada@example.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn restore_rebuilds_the_same_session() {
        let store = MemoryStore::new();
        {
            let _shell = signed_up(&store, "ada@example.com").await;
        }

        let mut shell = Shell::new(&store, AppConfig::default());
        assert!(shell.restore(sink()).unwrap());
        assert_eq!(
            shell.dashboard().unwrap().session.email,
            "ada@example.com"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn sign_out_resets_dashboard_and_session() {
        let store = MemoryStore::new();
        let mut shell = signed_up(&store, "ada@example.com").await;

        shell.sign_out().unwrap();
        assert!(shell.dashboard().is_none());

        let mut fresh = Shell::new(&store, AppConfig::default());
        assert!(!fresh.restore(sink()).unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn captured_referral_is_consumed_exactly_once() {
        let store = MemoryStore::new();
        let referrer_code = referral::derive_code("referrer@example.com");

        {
            let shell = Shell::new(&store, AppConfig::default());
            let url = crate::links::referral_link(&referrer_code);
            shell.capture_referral(&url).unwrap();
        }

        // New user signs up through the link
        let _shell = signed_up(&store, "new@example.com").await;
        assert_eq!(store.get(keys::PENDING_SIGNUP_REF).unwrap(), None);

        let ledger = ReferralLedger::new(&store, 10_000);
        let stats = ledger.stats(&referrer_code).unwrap();
        assert_eq!(stats.count, 1);

        // A second sign-in consumes nothing further
        let mut again = Shell::new(&store, AppConfig::default());
        again.sign_in("new@example.com", "hunter2", sink()).unwrap();
        assert_eq!(ledger.stats(&referrer_code).unwrap().count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn referrer_session_merges_pending_credits_as_a_deposit() {
        let store = MemoryStore::new();
        let _referrer = signed_up(&store, "referrer@example.com").await;
        let code = referral::derive_code("referrer@example.com");

        // Someone signs up with the referrer's code while they are away
        {
            let shell = Shell::new(&store, AppConfig::default());
            shell
                .capture_referral(&crate::links::referral_link(&code))
                .unwrap();
        }
        let _new_user = signed_up(&store, "friend@example.com").await;

        let mut shell = Shell::new(&store, AppConfig::default());
        shell
            .sign_in("referrer@example.com", "hunter2", sink())
            .unwrap();
        let dashboard = shell.dashboard().unwrap();
        assert_eq!(dashboard.ledger.balance(), 200_000 + 10_000);
        assert_eq!(dashboard.ledger.transactions()[0].kind, TxKind::Deposit);
        assert_eq!(dashboard.ledger.transactions()[0].description, "Referral bonus");

        // Drained exactly once: the next session sees nothing pending
        let mut next = Shell::new(&store, AppConfig::default());
        next.sign_in("referrer@example.com", "hunter2", sink())
            .unwrap();
        assert_eq!(next.dashboard().unwrap().ledger.balance(), 200_000);
    }

    #[tokio::test(start_paused = true)]
    async fn debit_notes_flow_through_the_dashboard() {
        let store = MemoryStore::new();
        let mut shell = signed_up(&store, "ada@example.com").await;

        let dashboard = shell.dashboard_mut().unwrap();
        dashboard
            .apply_debit(&DebitNote {
                amount: 500,
                kind: TxKind::Airtime,
                description: "MTN Airtime - 08012345678".to_string(),
            })
            .unwrap();

        assert_eq!(dashboard.ledger.balance(), 199_500);
        assert_eq!(dashboard.ledger.transactions().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn same_day_restore_does_not_credit_the_daily_reward() {
        let store = MemoryStore::new();
        let _shell = signed_up(&store, "ada@example.com").await;

        let mut shell = Shell::new(&store, AppConfig::default());
        shell.restore(sink()).unwrap();
        assert_eq!(shell.dashboard().unwrap().ledger.balance(), 200_000);
    }

    #[tokio::test(start_paused = true)]
    async fn next_day_restore_credits_the_daily_reward_once() {
        let store = MemoryStore::new();
        let _shell = signed_up(&store, "ada@example.com").await;

        // Age the stamp by a day
        let key = keys::last_balance_add("ada@example.com");
        let yesterday = Utc::now() - chrono::Duration::days(1);
        store.set(&key, &yesterday.to_rfc3339()).unwrap();

        let mut shell = Shell::new(&store, AppConfig::default());
        shell.restore(sink()).unwrap();
        let dashboard = shell.dashboard().unwrap();
        assert_eq!(dashboard.ledger.balance(), 200_000 + 200_000);
        assert_eq!(dashboard.ledger.transactions()[0].description, "Daily reward");

        // Stamp refreshed: restoring again the same day credits nothing
        let mut again = Shell::new(&store, AppConfig::default());
        again.restore(sink()).unwrap();
        assert_eq!(again.dashboard().unwrap().ledger.balance(), 200_000);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_registration_leaves_the_user_signed_out() {
        let store = MemoryStore::new();
        let mut shell = Shell::new(&store, AppConfig::default());
        let sched = Scheduler::new();
        sched.cancel();

        let entered = shell
            .sign_up("ada@example.com", "Ada", "hunter2", &sched, sink())
            .await
            .unwrap();
        assert!(!entered);
        assert!(shell.dashboard().is_none());
    }
}
