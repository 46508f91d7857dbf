//! # Account Limits & Constants
//!
//! Every numeric limit the account enforces lives here. Operations read
//! them through [`AccountConfig`]. By default the only limit is the `f64`
//! range itself; a caller opts into a tighter ceiling per account.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Balance Limits
// ---------------------------------------------------------------------------

/// Default balance ceiling: the whole finite `f64` range.
///
/// A result that reaches this value counts as overflow too. IEEE addition
/// rounds instead of overflowing (`f64::MAX + 100.0 == f64::MAX`), so a sum
/// that lands on `f64::MAX` has most likely saturated.
pub const MAX_BALANCE: f64 = f64::MAX;

/// Smallest accepted currency code length. Anything shorter is "unset".
pub const MIN_CURRENCY_CODE_LEN: usize = 1;

/// Decimal places used when an account is formatted for display.
/// Two, because most fiat currencies count in cents.
pub const DEFAULT_DISPLAY_DECIMALS: usize = 2;

// ---------------------------------------------------------------------------
// AccountConfig
// ---------------------------------------------------------------------------

/// Per-account tunables.
///
/// Defaults come from the constants above. The config travels with the
/// account when it is serialized; a payload without one gets the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Largest balance any operation may produce. Deposits, conversions and
    /// incoming transfers that would exceed it are rejected as overflow.
    /// Defaults to [`MAX_BALANCE`], i.e. no ceiling beyond the `f64` range.
    pub max_balance: f64,

    /// Decimal places for the `Display` implementation of an account.
    pub display_decimals: usize,
}

impl AccountConfig {
    /// Returns `true` if `value` is an acceptable balance under this config.
    ///
    /// Rejects negative and non-finite values, values that saturated to
    /// `f64::MAX`, and values above `max_balance`.
    pub fn accepts_balance(&self, value: f64) -> bool {
        value >= 0.0 && value < f64::MAX && value <= self.max_balance
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            max_balance: MAX_BALANCE,
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
        }
    }
}
