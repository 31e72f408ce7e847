//! AddUser - Command handler for storing a pattern derived from an address.

use std::sync::Arc;

use tracing::info;

use crate::application::pattern::PatternGenerator;
use crate::domain::foundation::DomainError;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Command to add a user from a validated display name and address.
///
/// The record is derived from `email`; `full_name` is accepted for the
/// request contract but does not influence the split.
#[derive(Debug, Clone)]
pub struct AddUserCommand {
    pub full_name: String,
    pub email: String,
}

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct AddUserResult {
    pub user: User,
}

/// Handler for adding users.
pub struct AddUserHandler {
    generator: PatternGenerator,
    repository: Arc<dyn UserRepository>,
}

impl AddUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            generator: PatternGenerator::new(repository.clone()),
            repository,
        }
    }

    pub async fn handle(&self, cmd: AddUserCommand) -> Result<AddUserResult, DomainError> {
        // 1. Split the address and allocate the next counter
        let new_user = self.generator.from_email(&cmd.email).await?;

        // 2. Persist
        let user = self.repository.insert(new_user).await?;

        info!(
            user_id = %user.id,
            domain = %user.domain,
            counter = user.counter,
            "User added"
        );

        Ok(AddUserResult { user })
    }
}
