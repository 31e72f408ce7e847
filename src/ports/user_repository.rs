//! User repository port.
//!
//! Defines the contract the pattern core needs from persistence: find the
//! latest record of a counter sequence, and insert new records.
//!
//! # Design
//!
//! - **Ordering**: "latest" means highest id. Implementations must assign
//!   ids monotonically so insertion order and id order agree.
//! - **No locking**: a counter lookup followed by an insert is two calls.
//!   Concurrent callers with the same signature can observe the same latest
//!   record and produce duplicate counters.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::pattern::Signature;
use crate::domain::user::{NewUser, User};

/// Repository port for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the record with the highest id whose shape and domain match
    /// `signature`.
    ///
    /// Returns `None` if the sequence has no records yet.
    async fn find_latest_by_signature(
        &self,
        signature: &Signature,
    ) -> Result<Option<User>, DomainError>;

    /// Insert a new record, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;

    /// Find a record by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// All records, highest id first.
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
