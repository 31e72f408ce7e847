//! GetUser - Query handler for a single user record.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Query for a user by id.
#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub id: UserId,
}

/// Handler for fetching one user.
pub struct GetUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `UserNotFound` if no record has the id
    pub async fn handle(&self, query: GetUserQuery) -> Result<User, DomainError> {
        self.repository
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", query.id))
            })
    }
}
