//! Account store trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, AccountDraft, AccountId};
use crate::domain::DomainError;

/// Storage contract for accounts.
///
/// Identifiers are assigned by the store: `insert` takes a draft and returns
/// the persisted account, `update` replaces an existing record wholesale.
#[async_trait]
pub trait AccountStore: Send + Sync + Debug {
    /// Look up an account by its identifier
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError>;

    /// Look up an account by its username (for login and uniqueness checks)
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account, assigning its identifier.
    /// Fails with a conflict if the username is already taken.
    async fn insert(&self, draft: AccountDraft) -> Result<Account, DomainError>;

    /// Replace the stored record for an existing account.
    /// Fails with a conflict if the username now collides with another account.
    async fn update(&self, account: &Account) -> Result<Account, DomainError>;

    /// List all accounts, ordered by identifier
    async fn find_all(&self) -> Result<Vec<Account>, DomainError>;

    /// Count stored accounts
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.find_all().await?.len())
    }

    /// Check if a username is already taken
    async fn username_taken(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
