use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::auth::{
  entities::Account,
  errors::RepositoryError,
  ports::AccountRepository,
  value_objects::{AccountId, Email, Role},
};

#[derive(Default)]
pub struct InMemoryAccountRepository {
  accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
  async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError> {
    let accounts = self.accounts.read().await;
    Ok(accounts.values().find(|a| &a.email == email).cloned())
  }

  async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
    Ok(self.accounts.read().await.get(&id).cloned())
  }

  async fn insert(&self, account: Account) -> Result<Account, RepositoryError> {
    // Uniqueness is checked under the write lock, so racing inserts serialize
    let mut accounts = self.accounts.write().await;

    if accounts.values().any(|a| a.email == account.email) {
      return Err(RepositoryError::DuplicateKey(format!(
        "email {} already exists",
        account.email
      )));
    }
    if accounts.contains_key(&account.id) {
      return Err(RepositoryError::DuplicateKey(format!(
        "id {} already exists",
        account.id
      )));
    }

    accounts.insert(account.id, account.clone());
    Ok(account)
  }

  async fn count_all(&self) -> Result<u64, RepositoryError> {
    Ok(self.accounts.read().await.len() as u64)
  }

  async fn update_role(
    &self,
    id: AccountId,
    role: Role,
  ) -> Result<Option<Account>, RepositoryError> {
    let mut accounts = self.accounts.write().await;

    Ok(accounts.get_mut(&id).map(|account| {
      account.role = role;
      account.clone()
    }))
  }
}
