//! PostgreSQL account store implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::account::{Account, AccountDraft, AccountId, AccountStatus, AccountStore};
use crate::domain::DomainError;

/// PostgreSQL implementation of AccountStore
#[derive(Debug, Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    /// Create a new store with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the accounts table when it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id BIGSERIAL PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                token TEXT,
                status TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                birthdate DATE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create accounts table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, token, status, created_at, birthdate
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get account: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row))),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, token, status, created_at, birthdate
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get account by username: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row))),
            None => Ok(None),
        }
    }

    async fn insert(&self, draft: AccountDraft) -> Result<Account, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO accounts (username, password_hash, token, status, created_at, birthdate)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(draft.username())
        .bind(draft.password_hash())
        .bind(draft.token())
        .bind(status_to_str(draft.status()))
        .bind(draft.created_at())
        .bind(draft.birthdate())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Username '{}' already exists",
                    draft.username()
                ))
            } else {
                DomainError::storage(format!("Failed to insert account: {}", e))
            }
        })?;

        Ok(draft.into_account(AccountId::new(id)))
    }

    async fn update(&self, account: &Account) -> Result<Account, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET username = $2, password_hash = $3, token = $4, status = $5, birthdate = $6
            WHERE id = $1
            "#,
        )
        .bind(account.id().value())
        .bind(account.username())
        .bind(account.password_hash())
        .bind(account.token())
        .bind(status_to_str(account.status()))
        .bind(account.birthdate())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Username '{}' already exists",
                    account.username()
                ))
            } else {
                DomainError::storage(format!("Failed to update account: {}", e))
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Account '{}' not found",
                account.id()
            )));
        }

        Ok(account.clone())
    }

    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, password_hash, token, status, created_at, birthdate
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list accounts: {}", e)))?;

        Ok(rows.iter().map(row_to_account).collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count accounts: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_account(row: &sqlx::postgres::PgRow) -> Account {
    let id: i64 = row.get("id");
    let username: String = row.get("username");
    let password_hash: String = row.get("password_hash");
    let token: Option<String> = row.get("token");
    let status: String = row.get("status");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let birthdate: Option<chrono::NaiveDate> = row.get("birthdate");

    Account::restore(
        AccountId::new(id),
        username,
        password_hash,
        token,
        str_to_status(&status),
        created_at,
        birthdate,
    )
}

fn status_to_str(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Online => "ONLINE",
        AccountStatus::Offline => "OFFLINE",
    }
}

fn str_to_status(s: &str) -> AccountStatus {
    match s {
        "ONLINE" => AccountStatus::Online,
        _ => AccountStatus::Offline,
    }
}
