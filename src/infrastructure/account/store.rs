//! In-memory account store implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountDraft, AccountId, AccountStore};
use crate::domain::DomainError;

/// In-memory implementation of AccountStore.
///
/// Backs the default configuration and every service-level test. Identifiers
/// start at 1 and are never reused, even though deletion does not exist here.
#[derive(Debug)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
    /// Index for username -> account id lookup
    username_index: Arc<RwLock<HashMap<String, i64>>>,
    next_id: AtomicI64,
}

impl InMemoryAccountStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            username_index: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id.value()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let username_index = self.username_index.read().await;

        if let Some(id) = username_index.get(username) {
            let accounts = self.accounts.read().await;
            return Ok(accounts.get(id).cloned());
        }

        Ok(None)
    }

    async fn insert(&self, draft: AccountDraft) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        let mut username_index = self.username_index.write().await;

        let username = draft.username().to_string();

        if username_index.contains_key(&username) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                username
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let account = draft.into_account(AccountId::new(id));

        username_index.insert(username, id);
        accounts.insert(id, account.clone());

        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        let mut username_index = self.username_index.write().await;

        let id = account.id().value();

        let Some(old_account) = accounts.get(&id) else {
            return Err(DomainError::not_found(format!(
                "Account '{}' not found",
                account.id()
            )));
        };

        // Keep the username index in step with a rename
        let old_username = old_account.username().to_string();
        let new_username = account.username().to_string();

        if old_username != new_username {
            if username_index.contains_key(&new_username) {
                return Err(DomainError::conflict(format!(
                    "Username '{}' already exists",
                    new_username
                )));
            }

            username_index.remove(&old_username);
            username_index.insert(new_username, id);
        }

        accounts.insert(id, account.clone());

        Ok(account.clone())
    }

    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;

        let mut result: Vec<Account> = accounts.values().cloned().collect();
        result.sort_by_key(|a| a.id().value());

        Ok(result)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.len())
    }
}
