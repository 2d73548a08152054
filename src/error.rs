// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 BluePay Labs

//! Crate-wide error taxonomy.
//!
//! Every failure here is recoverable at a screen boundary and rendered as an
//! inline message or a dedicated failure state; nothing is fatal to the
//! application. Screens therefore receive `Result`s, never panics.

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The email is already present in the credential registry.
    #[error("this email is already registered")]
    AlreadyRegistered,

    /// Sign-in failed. Deliberately identical for unknown email and wrong
    /// secret so the message cannot be used to enumerate accounts.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The reset token is unknown, spent, or past its expiry.
    #[error("invalid or expired reset token")]
    InvalidResetToken,

    /// A required form field was left empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A purchase or withdrawal form was submitted with the wrong gate code.
    #[error("invalid BPC code")]
    InvalidGateCode,

    /// The referred email was already counted for this referral code.
    #[error("referral already counted")]
    AlreadyCounted,

    /// A debit larger than the live balance was requested.
    #[error("insufficient balance for a debit of {amount}")]
    InsufficientFunds { amount: u64 },

    /// JSON encoding of an in-memory record failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias used throughout the crate.
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(WalletError::InvalidGateCode.to_string(), "invalid BPC code");
        assert_eq!(
            WalletError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
        assert_eq!(
            WalletError::InsufficientFunds { amount: 500 }.to_string(),
            "insufficient balance for a debit of 500"
        );
    }
}
