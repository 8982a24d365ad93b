//! Account domain
//!
//! This module provides the account entity, its validation rules, the
//! storage trait, and the visibility types used when profiles are read by
//! someone other than their owner.

mod entity;
mod profile;
mod store;
mod validation;

pub use entity::{Account, AccountDraft, AccountId, AccountStatus};
pub use profile::{ProfileView, PublicProfile};
pub use store::AccountStore;
pub use validation::{
    parse_birthdate, validate_password, validate_username, AccountValidationError,
};
