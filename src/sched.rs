// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Cancellable delay scheduler.
//!
//! Every simulated "network" step in a flow waits on [`Scheduler::step`],
//! which races the delay against a cancellation token. Tearing a screen
//! down cancels the token, so no flow ever advances its state machine after
//! the screen that owns it is gone. Tests drive the delays with tokio's
//! paused clock instead of waiting in real time.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Per-screen delay capability. Cloning shares the same cancellation scope.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    cancel: CancellationToken,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every pending step on this scheduler.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait out one simulated step. Returns `false` if the scheduler was
    /// cancelled first, in which case the caller must stop transitioning.
    pub async fn step(&self, delay: Duration) -> bool {
        tokio::select! {
            _ = tokio::time::sleep(delay) => true,
            _ = self.cancel.cancelled() => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn step_completes_after_the_delay() {
        let sched = Scheduler::new();
        assert!(sched.step(Duration::from_secs(2)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_scheduler_reports_false() {
        let sched = Scheduler::new();
        sched.cancel();
        assert!(!sched.step(Duration::from_secs(2)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_mid_step_wins_the_race() {
        let sched = Scheduler::new();
        let waiting = {
            let sched = sched.clone();
            tokio::spawn(async move { sched.step(Duration::from_secs(60)).await })
        };

        tokio::time::sleep(Duration::from_secs(1)).await;
        sched.cancel();
        assert!(!waiting.await.unwrap());
    }
}
