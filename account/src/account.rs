//! # Account
//!
//! An [`Account`] holds a balance in one currency and knows how to move it:
//! withdraw, deposit, convert into another currency at a caller-supplied
//! rate, and sweep everything into another account of the same currency.
//!
//! ## Two Call Styles
//!
//! Each mutating operation comes in two forms:
//!
//! - `withdraw`, `deposit`, `convert_to_currency`, `transfer_to_account`
//!   return nothing. An invalid request is dropped and the account is left
//!   exactly as it was. Callers that need to know compare state before and
//!   after.
//! - `try_withdraw`, `try_deposit`, `try_convert_to_currency`,
//!   `try_transfer_to_account` run the same validation and return an
//!   [`AccountError`] on refusal.
//!
//! Both forms validate first and mutate last, so a refused operation never
//! leaves a partial update behind.
//!
//! ## Invariants
//!
//! After any operation the balance is finite, non-negative, below
//! `f64::MAX` and no larger than [`AccountConfig::max_balance`]. The setters
//! ([`set_balance`](Account::set_balance), [`set_currency`](Account::set_currency))
//! skip validation and are meant for resetting state between scenarios.
//!
//! ## Thread Safety
//!
//! `Account` is a plain value. Sharing one across threads needs external
//! locking (e.g. `parking_lot::Mutex<Account>`).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AccountConfig;
use crate::currency::CurrencyCode;
use crate::error::AccountError;

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A single-currency monetary account.
///
/// Deserialization runs the same checks as [`Account::try_new`], against
/// the config carried in the payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    /// Current balance, denominated in `currency`.
    balance: f64,

    /// Currency the balance is held in.
    currency: CurrencyCode,

    /// Limits applied to every operation on this account.
    config: AccountConfig,
}

impl Account {
    /// Creates an account with default limits.
    ///
    /// Unchecked: the caller guarantees a non-empty currency and a finite,
    /// non-negative balance. Use [`try_new`](Self::try_new) for input that
    /// has not been validated.
    pub fn new(currency: impl Into<CurrencyCode>, initial_balance: f64) -> Self {
        Self::with_config(currency, initial_balance, AccountConfig::default())
    }

    /// Creates an account with explicit limits. Unchecked, like [`new`](Self::new).
    pub fn with_config(
        currency: impl Into<CurrencyCode>,
        initial_balance: f64,
        config: AccountConfig,
    ) -> Self {
        Self {
            balance: initial_balance,
            currency: currency.into(),
            config,
        }
    }

    /// Creates an account after validating the constructor contract.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::EmptyCurrency`] for an empty code and
    /// [`AccountError::InvalidInitialBalance`] for a balance that is
    /// negative or non-finite.
    pub fn try_new(
        currency: impl Into<CurrencyCode>,
        initial_balance: f64,
    ) -> Result<Self, AccountError> {
        Self::try_with_config(currency, initial_balance, AccountConfig::default())
    }

    /// Checked form of [`with_config`](Self::with_config). The balance must
    /// also respect `config.max_balance`.
    pub fn try_with_config(
        currency: impl Into<CurrencyCode>,
        initial_balance: f64,
        config: AccountConfig,
    ) -> Result<Self, AccountError> {
        let currency = currency.into();
        if currency.is_unset() {
            return Err(AccountError::EmptyCurrency);
        }
        if !config.accepts_balance(initial_balance) {
            return Err(AccountError::InvalidInitialBalance(initial_balance));
        }

        Ok(Self::with_config(currency, initial_balance, config))
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Returns the current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Overwrites the balance without validation.
    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }

    /// Returns the account's currency.
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Overwrites the currency without validation. An empty code leaves the
    /// account with no currency, which blocks transfers in both directions.
    pub fn set_currency(&mut self, currency: impl Into<CurrencyCode>) {
        self.currency = currency.into();
    }

    /// Returns the limits this account enforces.
    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    /// Returns `true` if both accounts have a currency and it is the same
    /// one, ignoring case.
    pub fn shares_currency_with(&self, other: &Account) -> bool {
        self.currency.matches(&other.currency)
    }

    // -----------------------------------------------------------------------
    // Withdraw
    // -----------------------------------------------------------------------

    /// Removes `amount` from the balance. Invalid requests are ignored.
    ///
    /// See [`try_withdraw`](Self::try_withdraw) for the rules.
    pub fn withdraw(&mut self, amount: f64) {
        discard("withdraw", self.try_withdraw(amount));
    }

    /// Removes `amount` from the balance and returns what is left.
    ///
    /// Withdrawing the entire balance is allowed and leaves exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidAmount`] if `amount` is not a positive
    /// finite number, and [`AccountError::InsufficientFunds`] if it exceeds
    /// the balance.
    pub fn try_withdraw(&mut self, amount: f64) -> Result<f64, AccountError> {
        ensure_positive_amount(amount)?;

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;

        debug!(
            currency = %self.currency,
            amount,
            balance = self.balance,
            "withdrawal applied"
        );
        Ok(self.balance)
    }

    // -----------------------------------------------------------------------
    // Deposit
    // -----------------------------------------------------------------------

    /// Adds `amount` to the balance. Invalid requests are ignored.
    ///
    /// See [`try_deposit`](Self::try_deposit) for the rules.
    pub fn deposit(&mut self, amount: f64) {
        discard("deposit", self.try_deposit(amount));
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidAmount`] if `amount` is not a positive
    /// finite number, and [`AccountError::Overflow`] if the sum is not
    /// finite or exceeds the configured ceiling.
    pub fn try_deposit(&mut self, amount: f64) -> Result<f64, AccountError> {
        ensure_positive_amount(amount)?;

        let new_balance = self.checked_result(self.balance + amount)?;
        self.balance = new_balance;

        debug!(
            currency = %self.currency,
            amount,
            balance = self.balance,
            "deposit applied"
        );
        Ok(self.balance)
    }

    // -----------------------------------------------------------------------
    // Currency Conversion
    // -----------------------------------------------------------------------

    /// Re-denominates the account into `new_currency` at `rate`. Invalid
    /// requests are ignored.
    ///
    /// See [`try_convert_to_currency`](Self::try_convert_to_currency) for
    /// the rules.
    pub fn convert_to_currency(&mut self, new_currency: impl Into<CurrencyCode>, rate: f64) {
        discard(
            "convert_to_currency",
            self.try_convert_to_currency(new_currency, rate),
        );
    }

    /// Multiplies the balance by `rate`, switches to `new_currency`, and
    /// returns the converted balance.
    ///
    /// Converting into the currency already held (in any letter case) is
    /// refused rather than treated as a rate-1 conversion.
    ///
    /// # Errors
    ///
    /// - [`AccountError::InvalidRate`] if `rate` is not a positive finite number.
    /// - [`AccountError::EmptyCurrency`] if `new_currency` is empty.
    /// - [`AccountError::SameCurrency`] if it equals the current currency.
    /// - [`AccountError::Overflow`] if the converted balance exceeds the ceiling.
    pub fn try_convert_to_currency(
        &mut self,
        new_currency: impl Into<CurrencyCode>,
        rate: f64,
    ) -> Result<f64, AccountError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(AccountError::InvalidRate(rate));
        }

        let new_currency = new_currency.into();
        if new_currency.is_unset() {
            return Err(AccountError::EmptyCurrency);
        }
        if new_currency == self.currency {
            return Err(AccountError::SameCurrency(new_currency));
        }

        let converted = self.checked_result(self.balance * rate)?;

        debug!(
            from = %self.currency,
            to = %new_currency,
            rate,
            balance = converted,
            "currency converted"
        );
        self.balance = converted;
        self.currency = new_currency;
        Ok(self.balance)
    }

    // -----------------------------------------------------------------------
    // Transfer
    // -----------------------------------------------------------------------

    /// Moves the entire balance into `other`. Invalid requests are ignored.
    ///
    /// See [`try_transfer_to_account`](Self::try_transfer_to_account) for
    /// the rules.
    pub fn transfer_to_account(&mut self, other: &mut Account) {
        discard("transfer_to_account", self.try_transfer_to_account(other));
    }

    /// Sweeps the entire balance into `other` and zeroes this account.
    ///
    /// There are no partial transfers. A zero balance transfers trivially.
    ///
    /// # Errors
    ///
    /// - [`AccountError::CurrencyUnset`] if either account has no currency.
    /// - [`AccountError::CurrencyMismatch`] if the currencies differ.
    /// - [`AccountError::Overflow`] if `other` would exceed its ceiling.
    pub fn try_transfer_to_account(
        &mut self,
        other: &mut Account,
    ) -> Result<TransferReceipt, AccountError> {
        if self.currency.is_unset() || other.currency.is_unset() {
            return Err(AccountError::CurrencyUnset);
        }
        if !self.shares_currency_with(other) {
            return Err(AccountError::CurrencyMismatch {
                source_currency: self.currency.clone(),
                target_currency: other.currency.clone(),
            });
        }

        let amount = self.balance;
        let target_balance = other.checked_result(other.balance + amount)?;

        other.balance = target_balance;
        self.balance = 0.0;

        debug!(
            currency = %self.currency,
            amount,
            target_balance,
            "balance transferred"
        );
        Ok(TransferReceipt {
            currency: self.currency.clone(),
            amount,
            source_balance: self.balance,
            target_balance,
        })
    }

    // -----------------------------------------------------------------------
    // Internal Helpers
    // -----------------------------------------------------------------------

    /// Accepts `result` as this account's next balance if it is within limits.
    fn checked_result(&self, result: f64) -> Result<f64, AccountError> {
        if self.config.accepts_balance(result) {
            Ok(result)
        } else {
            Err(AccountError::Overflow {
                current: self.balance,
                result,
                limit: self.config.max_balance,
            })
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$} {}",
            self.balance,
            self.currency,
            prec = self.config.display_decimals
        )
    }
}

/// Wire shape of an [`Account`] before validation.
#[derive(Deserialize)]
struct AccountRecord {
    balance: f64,
    currency: CurrencyCode,
    #[serde(default)]
    config: AccountConfig,
}

impl TryFrom<AccountRecord> for Account {
    type Error = AccountError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        Self::try_with_config(record.currency, record.balance, record.config)
    }
}

// ---------------------------------------------------------------------------
// Free Functions
// ---------------------------------------------------------------------------

/// Currency compatibility check between two possibly-absent accounts.
///
/// Returns `false` if either account is missing or has no currency, and
/// `true` only when both currencies are equal ignoring case.
pub fn check_currency(a: Option<&Account>, b: Option<&Account>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.shares_currency_with(b),
        _ => false,
    }
}

fn ensure_positive_amount(amount: f64) -> Result<(), AccountError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(AccountError::InvalidAmount(amount))
    }
}

/// Drops the outcome of a silent operation, logging a refusal.
fn discard<T>(operation: &'static str, outcome: Result<T, AccountError>) {
    if let Err(err) = outcome {
        debug!(operation, error = %err, "operation rejected, account unchanged");
    }
}

// ---------------------------------------------------------------------------
// TransferReceipt
// ---------------------------------------------------------------------------

/// Outcome of a successful [`Account::try_transfer_to_account`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Currency of both accounts.
    pub currency: CurrencyCode,

    /// The amount that moved: the source's whole balance before the sweep.
    pub amount: f64,

    /// The source's balance after the sweep. Always zero.
    pub source_balance: f64,

    /// The receiving account's balance after the sweep.
    pub target_balance: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
