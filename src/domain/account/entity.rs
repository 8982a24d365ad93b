//! Account entity and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Account identifier, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presence status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    /// Account holds a live session
    Online,
    /// No live session
    #[default]
    Offline,
}

impl AccountStatus {
    /// Check whether the account holds a live session
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

/// A new account that has not been persisted yet.
///
/// The store assigns the identifier; everything else is fixed at
/// registration time.
#[derive(Debug, Clone)]
pub struct AccountDraft {
    username: String,
    password_hash: String,
    token: String,
    status: AccountStatus,
    created_at: DateTime<Utc>,
    birthdate: Option<NaiveDate>,
}

impl AccountDraft {
    /// Create a draft for a freshly registered account
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            token: token.into(),
            status: AccountStatus::Offline,
            created_at: Utc::now(),
            birthdate: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn birthdate(&self) -> Option<NaiveDate> {
        self.birthdate
    }

    /// Materialize the draft with a store-assigned identifier
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            token: Some(self.token),
            status: self.status,
            created_at: self.created_at,
            birthdate: self.birthdate,
        }
    }
}

/// A persisted user account.
///
/// Credentials stay private to this type; the api layer builds its own
/// response shapes from the getters, so neither the password hash nor the
/// session token can cross the wire by accident.
#[derive(Debug, Clone)]
pub struct Account {
    /// Store-assigned identifier
    id: AccountId,
    /// Unique login name
    username: String,
    /// Argon2 password hash
    password_hash: String,
    /// Current session token, cleared on logout
    token: Option<String>,
    /// Presence status
    status: AccountStatus,
    /// Registration timestamp
    created_at: DateTime<Utc>,
    /// Optional profile birthdate
    birthdate: Option<NaiveDate>,
}

impl Account {
    /// Rebuild an account from stored fields
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: AccountId,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        token: Option<String>,
        status: AccountStatus,
        created_at: DateTime<Utc>,
        birthdate: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            token,
            status,
            created_at,
            birthdate,
        }
    }

    // Getters

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn birthdate(&self) -> Option<NaiveDate> {
        self.birthdate
    }

    /// Check whether the account holds a live session
    pub fn is_online(&self) -> bool {
        self.status.is_online()
    }

    // Mutators

    /// Start a session: store the freshly issued token and go online.
    /// Any previous token is overwritten, so older sessions stop validating.
    pub fn begin_session(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
        self.status = AccountStatus::Online;
    }

    /// End the session: drop the token and go offline
    pub fn end_session(&mut self) {
        self.token = None;
        self.status = AccountStatus::Offline;
    }

    /// Update the username
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Update or clear the birthdate
    pub fn set_birthdate(&mut self, birthdate: Option<NaiveDate>) {
        self.birthdate = birthdate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_account(id: i64, username: &str) -> Account {
        AccountDraft::new(username, "hashed_password", "token-1").into_account(AccountId::new(id))
    }

    #[test]
    fn test_account_id_value() {
        let id = AccountId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_account_status_default_offline() {
        assert_eq!(AccountStatus::default(), AccountStatus::Offline);
        assert!(AccountStatus::Online.is_online());
        assert!(!AccountStatus::Offline.is_online());
    }

    #[test]
    fn test_account_status_wire_format() {
        let json = serde_json::to_string(&AccountStatus::Online).unwrap();
        assert_eq!(json, "\"ONLINE\"");
        let parsed: AccountStatus = serde_json::from_str("\"OFFLINE\"").unwrap();
        assert_eq!(parsed, AccountStatus::Offline);
    }

    #[test]
    fn test_draft_into_account() {
        let account = create_test_account(1, "alice");

        assert_eq!(account.id().value(), 1);
        assert_eq!(account.username(), "alice");
        assert_eq!(account.password_hash(), "hashed_password");
        assert_eq!(account.token(), Some("token-1"));
        assert_eq!(account.status(), AccountStatus::Offline);
        assert!(account.birthdate().is_none());
    }

    #[test]
    fn test_begin_session_rotates_token() {
        let mut account = create_test_account(1, "alice");

        account.begin_session("token-2");
        assert_eq!(account.token(), Some("token-2"));
        assert!(account.is_online());

        account.begin_session("token-3");
        assert_eq!(account.token(), Some("token-3"));
    }

    #[test]
    fn test_end_session_clears_token() {
        let mut account = create_test_account(1, "alice");
        account.begin_session("token-2");

        account.end_session();
        assert!(account.token().is_none());
        assert_eq!(account.status(), AccountStatus::Offline);
    }

    #[test]
    fn test_profile_mutators() {
        let mut account = create_test_account(1, "alice");

        account.set_username("alice2");
        assert_eq!(account.username(), "alice2");

        let birthdate = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        account.set_birthdate(Some(birthdate));
        assert_eq!(account.birthdate(), Some(birthdate));

        account.set_birthdate(None);
        assert!(account.birthdate().is_none());
    }

    #[test]
    fn test_restore_round_trip() {
        let created_at = Utc::now();
        let account = Account::restore(
            AccountId::new(7),
            "bob",
            "hash",
            None,
            AccountStatus::Online,
            created_at,
            NaiveDate::from_ymd_opt(2000, 1, 2),
        );

        assert_eq!(account.id().value(), 7);
        assert_eq!(account.username(), "bob");
        assert!(account.token().is_none());
        assert!(account.is_online());
        assert_eq!(account.created_at(), created_at);
        assert_eq!(account.birthdate(), NaiveDate::from_ymd_opt(2000, 1, 2));
    }
}
