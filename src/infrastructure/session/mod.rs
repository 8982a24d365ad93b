//! Session infrastructure module
//!
//! This module provides the pieces the account service is built from:
//! password hashing with Argon2, opaque token generation, and the service
//! itself.

mod password;
mod service;
mod token;

pub use password::{Argon2Hasher, PasswordHasher};
pub use service::{AccountService, ProfileChanges};
pub use token::{tokens_match, TokenGenerator};
