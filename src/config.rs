//! Ledger configuration: branch code and checking-account ceilings.

use crate::decimal::Money;

/// Settings applied by the registry when it opens accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Branch code stamped on every account.
    pub branch: String,

    /// Largest amount a checking account may withdraw in one operation.
    pub withdrawal_limit: Money,

    /// Number of withdrawals a checking account may make.
    pub daily_withdrawal_limit: u32,
}

impl LedgerConfig {
    pub const DEFAULT_BRANCH: &'static str = "0001";
    pub const DEFAULT_WITHDRAWAL_LIMIT: i64 = 500;
    pub const DEFAULT_DAILY_WITHDRAWALS: u32 = 3;
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            branch: Self::DEFAULT_BRANCH.to_string(),
            withdrawal_limit: Money::from_units(Self::DEFAULT_WITHDRAWAL_LIMIT),
            daily_withdrawal_limit: Self::DEFAULT_DAILY_WITHDRAWALS,
        }
    }
}
