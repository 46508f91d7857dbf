//! Error types for account operations.
//!
//! Every rejected operation maps to exactly one [`AccountError`] variant.
//! The silent operations on [`Account`](crate::Account) discard these; the
//! `try_*` operations return them. Either way the account is untouched.

use thiserror::Error;

use crate::currency::CurrencyCode;

/// Reasons an account operation is refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// The amount is zero, negative, NaN or infinite.
    #[error("invalid amount: {0} (must be positive and finite)")]
    InvalidAmount(f64),

    /// Attempted to withdraw more than the current balance.
    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        /// The balance at the time of the request.
        available: f64,
        /// The amount that was requested.
        requested: f64,
    },

    /// The resulting balance would be non-finite, saturated at `f64::MAX`,
    /// or above the configured ceiling.
    #[error("balance overflow: current {current}, result {result} (limit {limit})")]
    Overflow {
        /// The balance before the failed operation.
        current: f64,
        /// The balance the operation would have produced.
        result: f64,
        /// The configured ceiling.
        limit: f64,
    },

    /// The conversion rate is zero, negative, NaN or infinite.
    #[error("invalid conversion rate: {0} (must be positive and finite)")]
    InvalidRate(f64),

    /// The target currency code is empty.
    #[error("target currency is empty")]
    EmptyCurrency,

    /// Conversion into the currency the account already holds.
    #[error("account is already denominated in {0}")]
    SameCurrency(CurrencyCode),

    /// One side of a transfer has no currency.
    #[error("currency is unset on one side of the transfer")]
    CurrencyUnset,

    /// The two accounts of a transfer hold different currencies.
    #[error("currency mismatch: source {source_currency}, target {target_currency}")]
    CurrencyMismatch {
        /// Currency of the account being drained.
        source_currency: CurrencyCode,
        /// Currency of the receiving account.
        target_currency: CurrencyCode,
    },

    /// Checked construction with a negative, non-finite or too large balance.
    #[error("invalid initial balance: {0}")]
    InvalidInitialBalance(f64),
}
