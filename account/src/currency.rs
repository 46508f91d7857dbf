//! # Currency Codes
//!
//! A [`CurrencyCode`] is the caller's spelling of a currency identifier
//! (`"EUR"`, `"sek"`, a custom ticker). Codes compare by value and ignore
//! case, folding each character with Unicode lowercase, so `"EUR"`, `"eur"`
//! and `"Eur"` are the same currency. The original spelling is kept for
//! display.
//!
//! An empty code is the "unset" currency. It can only appear through the
//! unchecked [`Account::set_currency`](crate::Account::set_currency) setter
//! or the unchecked constructor, and it never matches anything, itself
//! included, in [`CurrencyCode::matches`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::config::MIN_CURRENCY_CODE_LEN;

/// A case-insensitive currency identifier.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Wraps a code as given. No validation; see [`is_unset`](Self::is_unset).
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code exactly as the caller spelled it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for a code too short to identify a currency.
    pub fn is_unset(&self) -> bool {
        self.0.chars().count() < MIN_CURRENCY_CODE_LEN
    }

    /// Currency compatibility check: both codes set and equal ignoring case.
    ///
    /// Unlike `==`, two unset codes do not match.
    pub fn matches(&self, other: &CurrencyCode) -> bool {
        !self.is_unset() && !other.is_unset() && self == other
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for CurrencyCode {
    fn eq(&self, other: &Self) -> bool {
        self.folded().eq(other.folded())
    }
}

impl Eq for CurrencyCode {}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        *self == CurrencyCode::new(other)
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl Hash for CurrencyCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded() {
            c.hash(state);
        }
    }
}

impl PartialOrd for CurrencyCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CurrencyCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&CurrencyCode> for CurrencyCode {
    fn from(code: &CurrencyCode) -> Self {
        code.clone()
    }
}
