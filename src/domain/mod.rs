//! Domain layer - Core business logic and entities

pub mod account;
pub mod error;

pub use account::{
    parse_birthdate, validate_password, validate_username, Account, AccountDraft, AccountId,
    AccountStatus, AccountStore, AccountValidationError, ProfileView, PublicProfile,
};
pub use error::DomainError;
