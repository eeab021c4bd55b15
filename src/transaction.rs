//! Monetary transactions and how they are applied to an account.

use crate::account::Account;
use crate::decimal::Money;
use crate::error::Result;
use log::debug;
use std::fmt;

/// Transaction type tag, as recorded in an account's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Deposit => "Deposit",
            TxKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An immutable monetary operation.
///
/// The amount is not validated at construction; the account operation
/// decides whether it is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Credit funds to the account.
    Deposit(Money),

    /// Debit funds from the account, subject to balance and ceilings.
    Withdrawal(Money),
}

impl Transaction {
    pub fn kind(&self) -> TxKind {
        match self {
            Transaction::Deposit(_) => TxKind::Deposit,
            Transaction::Withdrawal(_) => TxKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// Applies the transaction to `account`.
    ///
    /// On success the transaction is appended to the account's history.
    /// On failure the account is left untouched and the reason is returned.
    pub fn apply(&self, account: &mut Account) -> Result<()> {
        match *self {
            Transaction::Deposit(amount) => account.deposit(amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(amount)?,
        }

        account.history_mut().record(self.kind(), self.amount());
        debug!(
            "{} of {} committed to account {}, balance {}",
            self.kind(),
            self.amount(),
            account.number(),
            account.balance()
        );
        Ok(())
    }
}
