//! Error types for the ledger.

use crate::decimal::Money;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while operating the ledger.
///
/// Everything except `Io` is a recoverable business-rule or lookup failure:
/// the session reports it and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Amount is zero, negative, or could not be parsed
    #[error("Operation failed: the amount is invalid, enter a positive value")]
    InvalidAmount,

    /// Deposit would push the balance past the largest representable amount
    #[error("Operation failed: the deposit would exceed the maximum balance, current balance is {balance}")]
    BalanceOverflow { balance: Money },

    /// Withdrawal larger than the current balance
    #[error("Operation failed: insufficient funds, current balance is {balance}")]
    InsufficientFunds { balance: Money },

    /// Withdrawal larger than the checking account's per-operation ceiling
    #[error("Operation failed: the amount exceeds the withdrawal limit of {limit}")]
    ExceedsOperationLimit { limit: Money },

    /// Checking account already made its allowed number of withdrawals
    #[error("Operation failed: maximum number of withdrawals ({limit}) reached")]
    DailyLimitExceeded { limit: u32 },

    /// No client registered under this identifier
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// Client has not opened any account yet
    #[error("Client {0} has no account")]
    NoAccount(String),

    /// Client identifier is blank
    #[error("Client identifier must not be empty")]
    EmptyIdentifier,

    /// A client with this identifier already exists
    #[error("A client with identifier {0} already exists")]
    DuplicateClient(String),

    /// Account number is not in the registry
    #[error("Account {0} not found")]
    AccountNotFound(u32),

    /// 1-based account choice outside `1..=count`
    #[error("Invalid selection {index}, choose between 1 and {count}")]
    InvalidSelection { index: usize, count: usize },

    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Io(err.to_string())
    }
}
