//! Account list persistence contract and key-value implementation.

use super::{read_document, write_document, RepoResult};
use crate::model::account::Account;
use crate::storage::KeyValueStore;

/// Storage key of the registered account list.
pub const ACCOUNTS_KEY: &str = "taskboard.accounts";

pub trait AccountRepository {
    /// Returns all accounts; an absent list reads as empty.
    fn load_accounts(&self) -> RepoResult<Vec<Account>>;
    /// Overwrites the stored account list.
    fn save_accounts(&self, accounts: &[Account]) -> RepoResult<()>;
}

pub struct KvAccountRepository<S> {
    store: S,
}

impl<S: KeyValueStore> KvAccountRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> AccountRepository for KvAccountRepository<S> {
    fn load_accounts(&self) -> RepoResult<Vec<Account>> {
        Ok(read_document(&self.store, ACCOUNTS_KEY)?.unwrap_or_default())
    }

    fn save_accounts(&self, accounts: &[Account]) -> RepoResult<()> {
        write_document(&self.store, ACCOUNTS_KEY, accounts)
    }
}
