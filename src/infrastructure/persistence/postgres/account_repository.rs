use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{
  entities::Account,
  errors::RepositoryError,
  ports::AccountRepository,
  value_objects::{AccountId, Email, PasswordHash, Role},
};

/// PostgreSQL implementation of the AccountRepository trait
pub struct PostgresAccountRepository {
  pool: PgPool,
}

impl PostgresAccountRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for users table
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
  id: Uuid,
  name: String,
  email: String,
  password_hash: String,
  role: String,
  created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
  type Error = RepositoryError;

  fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
    let email = Email::new(row.email).map_err(|e| {
      RepositoryError::DatabaseError(format!("stored email for {} is invalid: {}", row.id, e))
    })?;
    let role = row.role.parse::<Role>().map_err(|e| {
      RepositoryError::DatabaseError(format!("stored role for {} is invalid: {}", row.id, e))
    })?;

    Ok(Account::from_db(
      AccountId::from_uuid(row.id),
      row.name,
      email,
      PasswordHash::from_hash(row.password_hash),
      role,
      row.created_at,
    ))
  }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
  async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            SELECT id, name, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    row.map(Account::try_from).transpose()
  }

  async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            SELECT id, name, email, password_hash, role, created_at
            FROM users
            WHERE id = $1
            "#,
    )
    .bind(id.as_uuid())
    .fetch_optional(&self.pool)
    .await?;

    row.map(Account::try_from).transpose()
  }

  async fn insert(&self, account: Account) -> Result<Account, RepositoryError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            INSERT INTO users (id, name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, password_hash, role, created_at
            "#,
    )
    .bind(account.id.as_uuid())
    .bind(&account.name)
    .bind(account.email.as_str())
    .bind(account.password_hash.as_str())
    .bind(account.role.as_str())
    .bind(account.created_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn count_all(&self) -> Result<u64, RepositoryError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
      .fetch_one(&self.pool)
      .await?;

    Ok(count.max(0) as u64)
  }

  async fn update_role(
    &self,
    id: AccountId,
    role: Role,
  ) -> Result<Option<Account>, RepositoryError> {
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            UPDATE users
            SET role = $2
            WHERE id = $1
            RETURNING id, name, email, password_hash, role, created_at
            "#,
    )
    .bind(id.as_uuid())
    .bind(role.as_str())
    .fetch_optional(&self.pool)
    .await?;

    row.map(Account::try_from).transpose()
  }
}
