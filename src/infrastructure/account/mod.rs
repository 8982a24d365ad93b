//! Account store implementations

mod postgres_store;
mod store;

pub use postgres_store::PostgresAccountStore;
pub use store::InMemoryAccountStore;
