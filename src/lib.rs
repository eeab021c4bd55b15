//! # Bank Ledger
//!
//! An in-memory banking ledger driven by a text menu: clients, checking
//! accounts, deposits, withdrawals and statements for a single session.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Checked cent arithmetic via `rust_decimal`
//! - **Non-negative balances**: Only deposits and withdrawals move money
//! - **Append-only history**: Only successful transactions are recorded
//! - **Explicit context**: All state lives in a [`Registry`] passed around
//!
//! ## Example
//!
//! ```
//! use bank_ledger::{Money, NewClient, Registry};
//!
//! let mut registry = Registry::new();
//! registry
//!     .create_client(NewClient {
//!         id: "12345678900".to_string(),
//!         name: "Ana Souza".to_string(),
//!         ..NewClient::default()
//!     })
//!     .unwrap();
//! let account = registry.open_checking_account("12345678900").unwrap();
//! registry.deposit("12345678900", account, Money::from_units(100)).unwrap();
//! assert_eq!(registry.statement(account).unwrap().balance.to_string(), "100.00");
//! ```

pub mod account;
pub mod client;
pub mod config;
pub mod decimal;
pub mod error;
pub mod history;
pub mod menu;
pub mod registry;
pub mod transaction;

pub use account::{Account, AccountKind, CheckingLimits};
pub use client::{Client, NewClient};
pub use config::LedgerConfig;
pub use decimal::{Money, ParseMoneyError};
pub use error::{LedgerError, Result};
pub use history::{History, HistoryEntry};
pub use menu::{Command, Menu};
pub use registry::{AccountChoice, Registry, Statement};
pub use transaction::{Transaction, TxKind};
