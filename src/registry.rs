//! Session registry: every client and account created while the ledger runs.
//!
//! The registry is the single context object command handlers operate on.
//! Accounts are stored here in creation order; clients refer to them by
//! number and accounts refer back to their client by identifier.

use crate::account::{Account, AccountKind, CheckingLimits};
use crate::client::{Client, NewClient};
use crate::config::LedgerConfig;
use crate::decimal::Money;
use crate::error::{LedgerError, Result};
use crate::history::HistoryEntry;
use crate::transaction::Transaction;
use log::{debug, warn};

/// Outcome of looking up the account a client wants to operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountChoice {
    /// The client owns exactly one account.
    Single(u32),

    /// The client owns several; the caller must pick one by 1-based index.
    Multiple(Vec<u32>),
}

/// Everything needed to render an account statement.
#[derive(Debug, Clone, Copy)]
pub struct Statement<'a> {
    pub account: u32,
    pub entries: &'a [HistoryEntry],
    pub balance: Money,
}

/// In-memory registry of clients and accounts.
pub struct Registry {
    config: LedgerConfig,

    /// Clients in registration order.
    clients: Vec<Client>,

    /// Accounts in creation order.
    accounts: Vec<Account>,

    next_account_number: u32,
}

impl Registry {
    /// Creates an empty registry using the default configuration.
    pub fn new() -> Self {
        Registry::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Registry {
            config,
            clients: Vec::new(),
            accounts: Vec::new(),
            next_account_number: 1,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// All accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Registers a new client.
    ///
    /// Fails with `DuplicateClient` if the identifier is already taken.
    pub fn create_client(&mut self, details: NewClient) -> Result<&Client> {
        let client = Client::new(details);
        if client.id().is_empty() {
            return Err(LedgerError::EmptyIdentifier);
        }
        if self.find_client(client.id()).is_some() {
            warn!("Client {} already registered, ignoring", client.id());
            return Err(LedgerError::DuplicateClient(client.id().to_string()));
        }

        debug!("Registered client {}", client.id());
        self.clients.push(client);
        Ok(&self.clients[self.clients.len() - 1])
    }

    /// Linear scan for a client by identifier.
    pub fn find_client(&self, id: &str) -> Option<&Client> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        self.clients.iter().find(|c| c.id() == id)
    }

    /// Like [`Registry::find_client`], failing with `ClientNotFound`.
    pub fn client(&self, id: &str) -> Result<&Client> {
        self.find_client(id).ok_or_else(|| {
            warn!("Client {} not found", id.trim());
            LedgerError::ClientNotFound(id.trim().to_string())
        })
    }

    fn client_index(&self, id: &str) -> Result<usize> {
        let id = id.trim();
        self.clients
            .iter()
            .position(|c| !id.is_empty() && c.id() == id)
            .ok_or_else(|| {
                warn!("Client {} not found", id);
                LedgerError::ClientNotFound(id.to_string())
            })
    }

    pub fn account(&self, number: u32) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|a| a.number() == number)
            .ok_or(LedgerError::AccountNotFound(number))
    }

    /// Opens a checking account with the configured ceilings.
    pub fn open_checking_account(&mut self, client_id: &str) -> Result<u32> {
        let limits = CheckingLimits::new(
            self.config.withdrawal_limit,
            self.config.daily_withdrawal_limit,
        );
        self.open_account(client_id, AccountKind::Checking(limits))
    }

    /// Opens an account of the given kind for an existing client.
    ///
    /// Returns the new account number.
    pub fn open_account(&mut self, client_id: &str, kind: AccountKind) -> Result<u32> {
        let idx = self.client_index(client_id)?;
        let number = self.next_account_number;
        self.next_account_number += 1;

        let client = &mut self.clients[idx];
        let account = Account::new(number, self.config.branch.as_str(), client.id(), kind);
        client.add_account(number);
        debug!(
            "Opened {} account {} for client {}",
            account.kind().label(),
            number,
            client.id()
        );
        self.accounts.push(account);
        Ok(number)
    }

    /// Finds the account a client should operate on.
    ///
    /// Fails with `NoAccount` if the client owns none.
    pub fn resolve_account(&self, client_id: &str) -> Result<AccountChoice> {
        let client = self.client(client_id)?;
        match client.accounts() {
            [] => Err(LedgerError::NoAccount(client.id().to_string())),
            [number] => Ok(AccountChoice::Single(*number)),
            numbers => Ok(AccountChoice::Multiple(numbers.to_vec())),
        }
    }

    /// Picks one of a client's accounts by 1-based index.
    pub fn select_account(&self, client_id: &str, index: usize) -> Result<u32> {
        let client = self.client(client_id)?;
        let accounts = client.accounts();
        if accounts.is_empty() {
            return Err(LedgerError::NoAccount(client.id().to_string()));
        }

        index
            .checked_sub(1)
            .and_then(|i| accounts.get(i))
            .copied()
            .ok_or(LedgerError::InvalidSelection {
                index,
                count: accounts.len(),
            })
    }

    /// Has the client apply `transaction` to one of their accounts.
    pub fn execute(
        &mut self,
        client_id: &str,
        account_number: u32,
        transaction: Transaction,
    ) -> Result<()> {
        let idx = self.client_index(client_id)?;
        let client = &self.clients[idx];
        if !client.accounts().contains(&account_number) {
            warn!(
                "Account {} does not belong to client {}",
                account_number,
                client.id()
            );
            return Err(LedgerError::AccountNotFound(account_number));
        }

        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))?;

        client.apply_transaction(account, &transaction)
    }

    pub fn deposit(&mut self, client_id: &str, account_number: u32, amount: Money) -> Result<()> {
        self.execute(client_id, account_number, Transaction::Deposit(amount))
    }

    pub fn withdraw(&mut self, client_id: &str, account_number: u32, amount: Money) -> Result<()> {
        self.execute(client_id, account_number, Transaction::Withdrawal(amount))
    }

    /// Ordered history and current balance of an account.
    pub fn statement(&self, account_number: u32) -> Result<Statement<'_>> {
        let account = self.account(account_number)?;
        Ok(Statement {
            account: account_number,
            entries: account.history().entries(),
            balance: account.balance(),
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
