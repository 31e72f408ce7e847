//! PostgreSQL implementation of UserRepository.
//!
//! Persists user records to the `users` table. Ids come from a `BIGSERIAL`,
//! so id order is insertion order.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::pattern::Signature;
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

const USER_COLUMNS: &str =
    "id, first_name, middle_name, last_name, domain, counter, created_at, updated_at";

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_latest_by_signature(
        &self,
        signature: &Signature,
    ) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE first_name IS NOT NULL
              AND (middle_name IS NOT NULL) = $1
              AND (last_name IS NOT NULL) = $2
              AND domain = $3
            ORDER BY id DESC
            LIMIT 1
            "#
        ))
        .bind(signature.shape.middle_present)
        .bind(signature.shape.last_present)
        .bind(&signature.domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch latest user by signature", e))?;

        row.map(row_to_user).transpose()
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let now = Timestamp::now();
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users (
                first_name, middle_name, last_name, domain, counter, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.first_name)
        .bind(&user.middle_name)
        .bind(&user.last_name)
        .bind(&user.domain)
        .bind(i64::from(user.counter))
        .bind(now.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert user", e))?;

        row_to_user(row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch user", e))?;

        row.map(row_to_user).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list users", e))?;

        rows.into_iter().map(row_to_user).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn row_to_user(row: PgRow) -> Result<User, DomainError> {
    let id: i64 = column(&row, "id")?;
    let counter: i64 = column(&row, "counter")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(User {
        id: UserId::new(id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
        })?,
        first_name: column(&row, "first_name")?,
        middle_name: column(&row, "middle_name")?,
        last_name: column(&row, "last_name")?,
        domain: column(&row, "domain")?,
        counter: u32::try_from(counter).map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Counter out of range for user {}: {}", id, counter),
            )
        })?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}
