//! Account book and its reports.
//!
//! Every report is a single call into [`crate::processing`].
//!
//! ```rust
//! use rust_enumeration::bank::Bank;
//! use rust_enumeration::types::{Account, AccountKind};
//!
//! let mut bank = Bank::new();
//! bank.add_account(Account::new("Jay", 50.0, AccountKind::Personal));
//! bank.add_account(Account::new("Val", 150.0, AccountKind::Business));
//!
//! assert_eq!(bank.total_value(), 200.0);
//! assert_eq!(bank.largest_account().map(|a| a.name.as_str()), Some("Val"));
//! assert_eq!(bank.business_accounts().len(), 1);
//! ```

use crate::error::{ProcessingError, ProcessingResult};
use crate::processing::{every, filter, find, map, reduce, reduce_default, some};
use crate::types::{Account, AccountKind};

/// Interest rate paid by [`Bank::pay_default_interest`].
pub const INTEREST_RATE: f64 = 0.1;

/// An ordered collection of accounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bank holding `accounts` in the given order.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// First account whose holder is exactly `name`.
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        find(&self.accounts, |account| account.name == name)
    }

    /// Account with the highest balance.
    ///
    /// When several accounts share the maximum, the earliest one wins. `None` for an empty bank.
    pub fn largest_account(&self) -> Option<&Account> {
        reduce(&self.accounts, None::<&Account>, |largest, account| match largest {
            Some(current) if current.value >= account.value => Some(current),
            _ => Some(account),
        })
    }

    /// Multiply every balance by `1 + rate` and return the updated accounts.
    ///
    /// `rate` must be finite and not below `-1.0` (which would flip balances' sign).
    pub fn pay_interest(&mut self, rate: f64) -> ProcessingResult<&[Account]> {
        if !rate.is_finite() || rate < -1.0 {
            return Err(ProcessingError::contract(format!(
                "interest rate must be finite and >= -1.0 (got {rate})"
            )));
        }
        Ok(self.compound(1.0 + rate))
    }

    /// [`Bank::pay_interest`] at [`INTEREST_RATE`].
    pub fn pay_default_interest(&mut self) -> &[Account] {
        self.compound(1.0 + INTEREST_RATE)
    }

    fn compound(&mut self, factor: f64) -> &[Account] {
        self.accounts = map(&self.accounts, |account| Account {
            value: account.value * factor,
            ..account.clone()
        });
        &self.accounts
    }

    pub fn business_accounts(&self) -> Vec<Account> {
        self.accounts_of_kind(AccountKind::Business)
    }

    pub fn accounts_of_kind(&self, kind: AccountKind) -> Vec<Account> {
        filter(&self.accounts, |account| account.kind == kind)
    }

    /// Sum of all balances; `0.0` for an empty bank.
    pub fn total_value(&self) -> f64 {
        reduce_default(&self.accounts, |total: f64, account| total + account.value)
    }

    /// Mean balance, or `None` if the bank has no accounts.
    pub fn average_value(&self) -> Option<f64> {
        if self.accounts.is_empty() {
            return None;
        }
        Some(self.total_value() / self.accounts.len() as f64)
    }

    pub fn has_overdrawn_account(&self) -> bool {
        some(&self.accounts, |account| account.value < 0.0)
    }

    pub fn all_in_credit(&self) -> bool {
        every(&self.accounts, |account| account.value >= 0.0)
    }
}
