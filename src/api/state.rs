//! Application state for shared services

use std::sync::Arc;

use crate::domain::account::{Account, AccountId, AccountStore, ProfileView, PublicProfile};
use crate::domain::DomainError;
use crate::infrastructure::session::{AccountService, PasswordHasher, ProfileChanges};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn register(&self, username: &str, password: &str) -> Result<Account, DomainError>;
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, Account), DomainError>;
    async fn validate_session(&self, id: AccountId, token: &str) -> Result<Account, DomainError>;
    async fn list_accounts(
        &self,
        caller: AccountId,
        token: &str,
    ) -> Result<Vec<PublicProfile>, DomainError>;
    async fn get_account(
        &self,
        caller: AccountId,
        target: AccountId,
        token: &str,
    ) -> Result<ProfileView, DomainError>;
    async fn logout(&self, id: AccountId, token: &str) -> Result<(), DomainError>;
    async fn update_profile(
        &self,
        id: AccountId,
        token: &str,
        changes: ProfileChanges,
    ) -> Result<(), DomainError>;
    async fn account_count(&self) -> Result<usize, DomainError>;
}

// Implement the trait for the actual service

#[async_trait::async_trait]
impl<S: AccountStore + 'static, H: PasswordHasher + 'static> AccountServiceTrait
    for AccountService<S, H>
{
    async fn register(&self, username: &str, password: &str) -> Result<Account, DomainError> {
        AccountService::register(self, username, password).await
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, Account), DomainError> {
        AccountService::login(self, username, password).await
    }

    async fn validate_session(&self, id: AccountId, token: &str) -> Result<Account, DomainError> {
        AccountService::validate_session(self, id, token).await
    }

    async fn list_accounts(
        &self,
        caller: AccountId,
        token: &str,
    ) -> Result<Vec<PublicProfile>, DomainError> {
        AccountService::list_accounts(self, caller, token).await
    }

    async fn get_account(
        &self,
        caller: AccountId,
        target: AccountId,
        token: &str,
    ) -> Result<ProfileView, DomainError> {
        AccountService::get_account(self, caller, target, token).await
    }

    async fn logout(&self, id: AccountId, token: &str) -> Result<(), DomainError> {
        AccountService::logout(self, id, token).await
    }

    async fn update_profile(
        &self,
        id: AccountId,
        token: &str,
        changes: ProfileChanges,
    ) -> Result<(), DomainError> {
        AccountService::update_profile(self, id, token, changes).await
    }

    async fn account_count(&self) -> Result<usize, DomainError> {
        AccountService::account_count(self).await
    }
}

impl AppState {
    /// Create new application state with the provided service
    pub fn new(account_service: Arc<dyn AccountServiceTrait>) -> Self {
        Self { account_service }
    }
}
