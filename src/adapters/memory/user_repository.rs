//! In-memory user repository.
//!
//! Keeps records in insertion order behind a `RwLock`. Ids start at 1 and
//! increase by one per insert, so the newest record of a signature is the
//! last match in the vector.
//!
//! Suitable for tests and for running the service without a database.
//! Records are lost on restart.

use async_trait::async_trait;
use std::sync::RwLock;
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::pattern::Signature;
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

/// In-memory implementation of `UserRepository`.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryUserRepository::new());
/// let stored = repo.insert(new_user).await?;
/// assert_eq!(stored.id.value(), 1);
/// ```
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Returns the number of stored records.
    ///
    /// A poisoned lock still reports what was written before the panic.
    pub fn len(&self) -> usize {
        match self.users.read() {
            Ok(users) => users.len(),
            Err(poisoned) => {
                warn!("InMemoryUserRepository: lock poisoned, counting last written state");
                poisoned.into_inner().len()
            }
        }
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        "InMemoryUserRepository: lock poisoned",
    )
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_latest_by_signature(
        &self,
        signature: &Signature,
    ) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.iter().rev().find(|u| u.matches(signature)).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        let next_id = users.last().map(|u| u.id.value() + 1).unwrap_or(1);
        let id = UserId::new(next_id)?;

        let stored = User::from_new(id, user, Timestamp::now());
        users.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.iter().rev().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pattern::NameShape;

    fn new_user(first: &str, last: Option<&str>, domain: &str, counter: u32) -> NewUser {
        NewUser {
            first_name: first.to_string(),
            middle_name: None,
            last_name: last.map(str::to_string),
            domain: domain.to_string(),
            counter,
        }
    }

    fn first_last_at(domain: &str) -> Signature {
        Signature::new(
            NameShape {
                middle_present: false,
                last_present: true,
            },
            domain,
        )
    }

    #[tokio::test]
    async fn insert_assigns_monotonic_ids() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(new_user("a", None, "acme.com", 1)).await.unwrap();
        let second = repo.insert(new_user("b", None, "acme.com", 2)).await.unwrap();

        assert_eq!(first.id.value(), 1);
        assert_eq!(second.id.value(), 2);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn find_latest_returns_highest_matching_id() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("john", Some("smith"), "acme.com", 1)).await.unwrap();
        repo.insert(new_user("jane", Some("doe"), "acme.com", 2)).await.unwrap();
        repo.insert(new_user("solo", None, "acme.com", 1)).await.unwrap();

        let latest = repo
            .find_latest_by_signature(&first_last_at("acme.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.first_name, "jane");
        assert_eq!(latest.counter, 2);
    }

    #[tokio::test]
    async fn find_latest_is_scoped_to_domain() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("john", Some("smith"), "acme.com", 1)).await.unwrap();

        let latest = repo
            .find_latest_by_signature(&first_last_at("other.com"))
            .await
            .unwrap();
        assert!(latest.is_none());
    }

    #[tokio::test]
    async fn find_by_id_returns_stored_record() {
        let repo = InMemoryUserRepository::new();
        let stored = repo.insert(new_user("john", None, "acme.com", 1)).await.unwrap();

        let found = repo.find_by_id(stored.id).await.unwrap();
        assert_eq!(found, Some(stored));

        let missing = repo.find_by_id(UserId::new(99).unwrap()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn list_all_orders_newest_first() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("a", None, "acme.com", 1)).await.unwrap();
        repo.insert(new_user("b", None, "acme.com", 2)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|u| u.first_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn len_survives_a_poisoned_lock() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("john", Some("smith"), "acme.com", 1)).await.unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = repo.users.write().unwrap();
            panic!("writer panicked while holding the lock");
        }));
        assert!(result.is_err());
        assert!(repo.users.is_poisoned());

        assert_eq!(repo.len(), 1);
        assert!(!repo.is_empty());

        let err = repo.list_all().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn new_repository_is_empty() {
        assert!(InMemoryUserRepository::default().is_empty());
    }
}
