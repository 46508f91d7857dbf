// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Bank Account — Core Library
//!
//! A single monetary account: a balance, the currency it is held in, and
//! the four ways to move it (withdraw, deposit, convert, transfer).
//!
//! ## Architecture
//!
//! - **account** — The [`Account`] entity and its validated operations.
//! - **currency** — Case-insensitive [`CurrencyCode`] values.
//! - **error** — [`AccountError`], one variant per refusal reason.
//! - **config** — Balance ceiling, display precision, [`AccountConfig`].
//!
//! ## Design Philosophy
//!
//! 1. Validate first, mutate last. A refused operation changes nothing.
//! 2. Silent operations for compatibility, `try_*` operations for callers
//!    that want to know why.
//! 3. Currencies compare by value, never by identity, and ignore case.
//! 4. Exchange rates come from the caller. This crate never looks one up.
//!
//! ## Example
//!
//! ```
//! use bank_account::Account;
//!
//! let mut source = Account::new("EUR", 100.0);
//! let mut target = Account::new("eur", 150.0);
//!
//! source.withdraw(-20.0); // ignored
//! source.transfer_to_account(&mut target);
//!
//! assert_eq!(source.balance(), 0.0);
//! assert_eq!(target.balance(), 250.0);
//! ```

pub mod account;
pub mod config;
pub mod currency;
pub mod error;

pub use account::{check_currency, Account, TransferReceipt};
pub use config::AccountConfig;
pub use currency::CurrencyCode;
pub use error::AccountError;
