//! Account service for registration, sessions and profile access

use std::sync::Arc;

use crate::domain::account::{
    parse_birthdate, validate_password, validate_username, Account, AccountDraft, AccountId,
    AccountStore, ProfileView, PublicProfile,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;
use super::token::{tokens_match, TokenGenerator};

/// Profile fields a caller may change. Absent fields stay as they are;
/// unrecognized request keys never reach this type.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub username: Option<String>,
    pub birthdate: Option<String>,
}

/// Owns every business rule around accounts: username uniqueness, credential
/// verification, token issue and rotation, session validation, and the
/// self/other visibility split on profile reads.
#[derive(Debug)]
pub struct AccountService<S: AccountStore, H: PasswordHasher> {
    store: Arc<S>,
    hasher: Arc<H>,
    tokens: TokenGenerator,
}

impl<S: AccountStore, H: PasswordHasher> AccountService<S, H> {
    /// Create a new account service
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self {
            store,
            hasher,
            tokens: TokenGenerator::new(),
        }
    }

    /// Register a new account.
    ///
    /// The account starts offline with a freshly issued token in the store.
    /// The token is not handed out here; clients obtain one through `login`.
    pub async fn register(&self, username: &str, password: &str) -> Result<Account, DomainError> {
        validate_username(username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(password).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.store.username_taken(username).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' is already taken",
                username
            )));
        }

        let password_hash = self.hasher.hash(password)?;
        let token = self.tokens.generate();

        self.store
            .insert(AccountDraft::new(username, password_hash, token))
            .await
    }

    /// Authenticate with username and password.
    ///
    /// Issues a fresh token on success, replacing whatever token the account
    /// held before, and flips the account online. The same message is used
    /// for unknown usernames and wrong passwords.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, Account), DomainError> {
        let mut account = self
            .store
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::unauthorized("Invalid username or password"))?;

        if !self.hasher.verify(password, account.password_hash()) {
            return Err(DomainError::unauthorized("Invalid username or password"));
        }

        let token = self.tokens.generate();
        account.begin_session(token.clone());

        let account = self.store.update(&account).await?;

        Ok((token, account))
    }

    /// Check a session token against an account.
    ///
    /// The token may arrive raw or with a `Bearer ` prefix. Fails with
    /// not-found when the account id is unknown, and unauthorized when the
    /// account holds no token or the values differ.
    pub async fn validate_session(
        &self,
        id: AccountId,
        token: &str,
    ) -> Result<Account, DomainError> {
        let account = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", id)))?;

        let candidate = normalize_token(token);

        let stored = account
            .token()
            .ok_or_else(|| DomainError::unauthorized("No active session for this account"))?;

        if !tokens_match(candidate, stored) {
            return Err(DomainError::unauthorized("Session token does not match"));
        }

        Ok(account)
    }

    /// List every account as its public projection
    pub async fn list_accounts(
        &self,
        caller: AccountId,
        token: &str,
    ) -> Result<Vec<PublicProfile>, DomainError> {
        self.validate_session(caller, token).await?;

        let accounts = self.store.find_all().await?;

        Ok(accounts.iter().map(PublicProfile::from_account).collect())
    }

    /// Read one account: the full record for its owner, the public
    /// projection for anyone else
    pub async fn get_account(
        &self,
        caller: AccountId,
        target: AccountId,
        token: &str,
    ) -> Result<ProfileView, DomainError> {
        self.validate_session(caller, token).await?;

        let account = self
            .store
            .find_by_id(target)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", target)))?;

        if caller == target {
            Ok(ProfileView::Own(account))
        } else {
            Ok(ProfileView::Public(PublicProfile::from_account(&account)))
        }
    }

    /// End the session: clear the token and go offline.
    /// A repeated call with the old token fails unauthorized.
    pub async fn logout(&self, id: AccountId, token: &str) -> Result<(), DomainError> {
        let mut account = self.validate_session(id, token).await?;

        account.end_session();
        self.store.update(&account).await?;

        Ok(())
    }

    /// Apply profile changes for the account that owns the session.
    ///
    /// A new username must pass validation and stay unique; a birthdate must
    /// be an ISO calendar date.
    pub async fn update_profile(
        &self,
        id: AccountId,
        token: &str,
        changes: ProfileChanges,
    ) -> Result<(), DomainError> {
        let mut account = self.validate_session(id, token).await?;

        if let Some(username) = changes.username {
            validate_username(&username).map_err(|e| DomainError::validation(e.to_string()))?;

            if username != account.username() && self.store.username_taken(&username).await? {
                return Err(DomainError::conflict(format!(
                    "Username '{}' is already taken",
                    username
                )));
            }

            account.set_username(username);
        }

        if let Some(birthdate) = changes.birthdate.as_deref() {
            let parsed =
                parse_birthdate(birthdate).map_err(|e| DomainError::validation(e.to_string()))?;
            account.set_birthdate(Some(parsed));
        }

        self.store.update(&account).await?;

        Ok(())
    }

    /// Count stored accounts (used by readiness checks)
    pub async fn account_count(&self) -> Result<usize, DomainError> {
        self.store.count().await
    }
}

/// Strip an optional `Bearer ` prefix and surrounding whitespace
fn normalize_token(token: &str) -> &str {
    token.strip_prefix("Bearer ").unwrap_or(token).trim()
}
