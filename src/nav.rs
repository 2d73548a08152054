// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Navigation stack for the authenticated shell.
//!
//! The stack tracks every screen visited since sign-in, with the dashboard
//! as the permanent root. A host back action (hardware button, browser
//! back) is delivered through [`NavigationStack::handle_back`] and moves one
//! step within the stack; on the root it is absorbed so the user never
//! falls out of the authenticated shell. Mirroring into the host history is
//! abstracted behind the [`HistorySink`] capability so the stack logic is
//! testable without a browser.

use serde::{Deserialize, Serialize};

/// Identifier of one screen in the authenticated area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Dashboard,
    Airtime,
    Data,
    Withdraw,
    BuyBpc,
    Validation,
    History,
    Profile,
    Support,
    Group,
    EarnMore,
    Watch,
    About,
    Notifications,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Screen::Dashboard => "dashboard",
            Screen::Airtime => "airtime",
            Screen::Data => "data",
            Screen::Withdraw => "withdraw",
            Screen::BuyBpc => "buy_bpc",
            Screen::Validation => "validation",
            Screen::History => "history",
            Screen::Profile => "profile",
            Screen::Support => "support",
            Screen::Group => "group",
            Screen::EarnMore => "earn_more",
            Screen::Watch => "watch",
            Screen::About => "about",
            Screen::Notifications => "notifications",
        };
        f.write_str(name)
    }
}

/// Host-history adapter. The production binding pushes and re-arms entries
/// in the browser history; tests record the calls.
pub trait HistorySink {
    /// Mirror a newly pushed screen into the host history.
    fn entry_pushed(&mut self, screen: Screen);

    /// Re-arm the guard entry after a back action was absorbed on the root.
    fn rearm_root(&mut self);
}

/// Sink for hosts without a native history (tests, the demo binary).
#[derive(Debug, Default)]
pub struct NullSink;

impl HistorySink for NullSink {
    fn entry_pushed(&mut self, _screen: Screen) {}
    fn rearm_root(&mut self) {}
}

/// Screen stack of the authenticated shell. Never empty; the bottom element
/// is always [`Screen::Dashboard`].
pub struct NavigationStack {
    stack: Vec<Screen>,
    sink: Box<dyn HistorySink + Send>,
}

impl NavigationStack {
    pub fn new(sink: Box<dyn HistorySink + Send>) -> Self {
        Self {
            stack: vec![Screen::Dashboard],
            sink,
        }
    }

    /// The currently rendered screen: always the top of the stack.
    pub fn current(&self) -> Screen {
        *self.stack.last().expect("stack is never empty")
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Make `screen` active, mirroring the change into the host history.
    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
        self.sink.entry_pushed(screen);
        tracing::debug!(screen = %screen, depth = self.stack.len(), "screen pushed");
    }

    /// Leave the current screen. Popping the sole dashboard root is a no-op.
    pub fn pop(&mut self) -> Screen {
        if self.stack.len() > 1 {
            let left = self.stack.pop().expect("stack is never empty");
            tracing::debug!(screen = %left, "screen popped");
        }
        self.current()
    }

    /// Clear back to `[dashboard]`.
    pub fn reset_to_root(&mut self) {
        self.stack.truncate(1);
    }

    /// Translate a host back action. Above the root this pops one screen;
    /// on the root the action is absorbed and the guard entry re-armed, so
    /// the authenticated shell is never exited.
    pub fn handle_back(&mut self) -> Screen {
        if self.stack.len() > 1 {
            self.pop()
        } else {
            self.sink.rearm_root();
            self.current()
        }
    }
}
