//! Account directory: the set of accounts known to one ledger session.

use crate::account::{Account, AccountId};
use crate::error::{LedgerError, Result};
use log::debug;
use std::collections::HashMap;

/// Accounts indexed by ID, enumerated in insertion order.
///
/// Created empty or loaded from the account store, and passed explicitly to
/// whichever shell drives it.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    /// Accounts in insertion order.
    accounts: Vec<Account>,

    /// Position of each account in `accounts`, keyed by account ID.
    index: HashMap<AccountId, usize>,
}

impl AccountDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        AccountDirectory {
            accounts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds an account. Fails with `DuplicateAccountId` if its ID is taken,
    /// leaving the directory unchanged.
    pub fn insert(&mut self, account: Account) -> Result<()> {
        if self.index.contains_key(account.id()) {
            return Err(LedgerError::DuplicateAccountId(account.id().to_string()));
        }

        debug!("Inserted account {} ({})", account.id(), account.kind().tag());
        self.index
            .insert(account.id().to_string(), self.accounts.len());
        self.accounts.push(account);
        Ok(())
    }

    /// Sign-in lookup: the account must exist and its holder name must match
    /// `holder_name` exactly, including case.
    pub fn find(&self, id: &str, holder_name: &str) -> Result<&Account> {
        match self.get(id) {
            Some(account) if account.holder_name() == holder_name => Ok(account),
            _ => Err(LedgerError::AuthFailure),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.index.get(id).map(|&pos| &self.accounts[pos])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.index.get(id).map(|&pos| &mut self.accounts[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All accounts, in insertion order.
    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
