use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::Account;

/// Directory of accounts keyed by the exact holder name.
#[derive(Default)]
pub struct AccountRegistry {
    accounts: HashMap<String, Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Opens a fresh account under `holder_name` and returns it.
    /// An existing account with the same name is replaced and dropped.
    pub fn create_account(&mut self, holder_name: &str) -> &mut Account {
        let account = Account::new(holder_name);
        match self.accounts.entry(holder_name.to_owned()) {
            Entry::Occupied(mut entry) => {
                entry.insert(account);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(account),
        }
    }

    /// Case-sensitive, exact-match lookup.
    pub fn find_account(&self, holder_name: &str) -> Option<&Account> {
        self.accounts.get(holder_name)
    }

    pub fn find_account_mut(&mut self, holder_name: &str) -> Option<&mut Account> {
        self.accounts.get_mut(holder_name)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
