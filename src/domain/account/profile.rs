//! Profile visibility types
//!
//! Every account has two faces: the full record the owner sees, and the
//! public projection everyone else gets. The projection is built here, in
//! the domain, so no caller can accidentally hand out credentials.

use chrono::NaiveDate;

use super::entity::{Account, AccountId, AccountStatus};

/// The fields of an account that any authenticated caller may see
#[derive(Debug, Clone, PartialEq)]
pub struct PublicProfile {
    pub id: AccountId,
    pub username: String,
    pub status: AccountStatus,
    pub birthdate: Option<NaiveDate>,
}

impl PublicProfile {
    /// Project an account down to its public fields
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.id(),
            username: account.username().to_string(),
            status: account.status(),
            birthdate: account.birthdate(),
        }
    }
}

/// What a profile lookup returns, depending on who is asking
#[derive(Debug, Clone)]
pub enum ProfileView {
    /// The caller owns this account and gets the full record
    Own(Account),
    /// Someone else's account, reduced to public fields
    Public(PublicProfile),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountDraft;

    #[test]
    fn test_public_profile_projection() {
        let mut account =
            AccountDraft::new("alice", "secret_hash", "secret_token").into_account(AccountId::new(5));
        account.set_birthdate(NaiveDate::from_ymd_opt(1991, 3, 4));

        let profile = PublicProfile::from_account(&account);

        assert_eq!(profile.id.value(), 5);
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.status, AccountStatus::Offline);
        assert_eq!(profile.birthdate, NaiveDate::from_ymd_opt(1991, 3, 4));
    }
}
