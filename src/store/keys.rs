// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Key constants and builders for the persistent store layout.
//!
//! Every persisted key is declared here so the full layout is visible in
//! one place.

/// JSON array of registered identity records.
pub const REGISTERED_USERS: &str = "registered_users";

/// JSON session record of the currently signed-in user.
pub const SESSION: &str = "session";

/// JSON array of referral bonuses not yet merged into a live balance.
pub const PENDING_REFERRAL_CREDITS: &str = "pending_referral_credits";

/// Referral code captured from a `ref=` query parameter, consumed at the
/// next successful sign-up or sign-in.
pub const PENDING_SIGNUP_REF: &str = "pending_signup_ref";

/// Per-referrer aggregate ledger entry.
pub fn referrals(code: &str) -> String {
    format!("referrals_{code}")
}

/// RFC 3339 timestamp of the last daily reward credited to `email`.
pub fn last_balance_add(email: &str) -> String {
    format!("last_balance_add_{email}")
}
