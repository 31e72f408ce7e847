//! ListUsers - Query handler for every stored record.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Handler listing all users, newest first.
pub struct ListUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::user::NewUser;

    #[tokio::test]
    async fn test_list_users_newest_first() {
        let repo = Arc::new(InMemoryUserRepository::new());
        for first in ["a", "b", "c"] {
            repo.insert(NewUser {
                first_name: first.to_string(),
                middle_name: None,
                last_name: None,
                domain: "acme.com".to_string(),
                counter: 1,
            })
            .await
            .unwrap();
        }

        let users = ListUsersHandler::new(repo).handle().await.unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_list_users_empty_store() {
        let users = ListUsersHandler::new(Arc::new(InMemoryUserRepository::new()))
            .handle()
            .await
            .unwrap();
        assert!(users.is_empty());
    }
}
