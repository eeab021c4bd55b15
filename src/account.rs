//! Account model and balance operations.
//!
//! Maintains the invariant: `balance >= 0` at all times.

use crate::decimal::Money;
use crate::error::{LedgerError, Result};
use crate::history::History;
use log::debug;

/// Ceilings and withdrawal counter of a checking account.
///
/// # Invariants
///
/// - `withdrawals_made <= daily_withdrawal_limit`
/// - The counter never resets during a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckingLimits {
    /// Largest amount accepted by a single withdrawal.
    pub withdrawal_limit: Money,

    /// Number of withdrawals allowed.
    pub daily_withdrawal_limit: u32,

    withdrawals_made: u32,
}

impl CheckingLimits {
    pub fn new(withdrawal_limit: Money, daily_withdrawal_limit: u32) -> Self {
        CheckingLimits {
            withdrawal_limit,
            daily_withdrawal_limit,
            withdrawals_made: 0,
        }
    }

    /// Successful withdrawals so far.
    pub fn withdrawals_made(&self) -> u32 {
        self.withdrawals_made
    }
}

/// Account variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// Plain account, only balance rules apply.
    Basic,

    /// Checking account with per-operation and count ceilings on withdrawals.
    Checking(CheckingLimits),
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Basic => "Basic",
            AccountKind::Checking(_) => "Checking",
        }
    }
}

/// A bank account.
///
/// The balance only changes through [`Account::deposit`] and
/// [`Account::withdraw`]; the owner is held by identifier, not by reference.
#[derive(Debug, Clone)]
pub struct Account {
    number: u32,
    branch: String,
    owner: String,
    balance: Money,
    kind: AccountKind,
    history: History,
}

impl Account {
    /// Creates an empty account.
    pub fn new(
        number: u32,
        branch: impl Into<String>,
        owner: impl Into<String>,
        kind: AccountKind,
    ) -> Self {
        Account {
            number,
            branch: branch.into(),
            owner: owner.into(),
            balance: Money::ZERO,
            kind,
            history: History::new(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Identifier of the client holding this account.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Deposits funds into the account.
    ///
    /// Fails with `InvalidAmount` if `amount <= 0`, and with
    /// `BalanceOverflow` if the new balance would not fit in [`Money`].
    pub fn deposit(&mut self, amount: Money) -> Result<()> {
        if !amount.is_positive() {
            debug!(
                "Account {}: rejected deposit of {} (invalid amount)",
                self.number, amount
            );
            return Err(LedgerError::InvalidAmount);
        }

        let Some(balance) = self.balance.checked_add(amount) else {
            debug!(
                "Account {}: rejected deposit of {} (balance overflow)",
                self.number, amount
            );
            return Err(LedgerError::BalanceOverflow {
                balance: self.balance,
            });
        };
        self.balance = balance;
        Ok(())
    }

    /// Withdraws funds from the account.
    ///
    /// Checking accounts test, in order: the per-operation ceiling, the
    /// withdrawal count, then the balance rules shared with basic accounts.
    /// The first violated rule is the one reported.
    pub fn withdraw(&mut self, amount: Money) -> Result<()> {
        let result = self
            .check_ceilings(amount)
            .and_then(|()| self.debit(amount));

        match &result {
            Ok(()) => {
                if let AccountKind::Checking(limits) = &mut self.kind {
                    limits.withdrawals_made += 1;
                }
            }
            Err(e) => debug!(
                "Account {}: rejected withdrawal of {} ({:?})",
                self.number, amount, e
            ),
        }
        result
    }

    fn check_ceilings(&self, amount: Money) -> Result<()> {
        let AccountKind::Checking(limits) = &self.kind else {
            return Ok(());
        };

        if amount > limits.withdrawal_limit {
            return Err(LedgerError::ExceedsOperationLimit {
                limit: limits.withdrawal_limit,
            });
        }
        if limits.withdrawals_made >= limits.daily_withdrawal_limit {
            return Err(LedgerError::DailyLimitExceeded {
                limit: limits.daily_withdrawal_limit,
            });
        }
        Ok(())
    }

    /// Balance rules shared by every account kind.
    fn debit(&mut self, amount: Money) -> Result<()> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
            });
        }
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount);
        }

        // 0 < amount <= balance, so the difference is always in range.
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::InvalidAmount)?;
        Ok(())
    }
}
