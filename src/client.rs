//! Bank clients.

use crate::account::Account;
use crate::error::Result;
use crate::transaction::Transaction;

/// Registration data for a new client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClient {
    /// Unique identifier, e.g. a national ID number.
    pub id: String,
    pub name: String,
    pub birth_date: String,
    pub address: String,
}

/// A registered client.
///
/// Owns the numbers of its accounts, in the order they were opened. The
/// accounts themselves live in the registry.
#[derive(Debug, Clone)]
pub struct Client {
    id: String,
    name: String,
    birth_date: String,
    address: String,
    accounts: Vec<u32>,
}

impl Client {
    pub fn new(details: NewClient) -> Self {
        Client {
            id: details.id.trim().to_string(),
            name: details.name,
            birth_date: details.birth_date,
            address: details.address,
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Account numbers owned by this client, oldest first.
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    /// Records ownership of an account. No duplicate check.
    pub fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }

    /// Applies `transaction` to `account` on behalf of this client.
    pub fn apply_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<()> {
        transaction.apply(account)
    }
}
