//! CounterResolver - next counter for a signature.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::pattern::Signature;
use crate::ports::UserRepository;

/// Allocates the next counter of a signature's sequence.
///
/// The counter is one more than that of the latest stored record sharing the
/// signature, or 1 when the sequence is empty. Nothing is reserved: the
/// caller inserts the record afterwards, so two concurrent resolutions for
/// the same signature may return the same value.
#[derive(Clone)]
pub struct CounterResolver {
    repository: Arc<dyn UserRepository>,
}

impl CounterResolver {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Returns the counter the next record of `signature` should carry.
    pub async fn next_counter(&self, signature: &Signature) -> Result<u32, DomainError> {
        let latest = self.repository.find_latest_by_signature(signature).await?;

        let counter = match latest {
            Some(user) => user.counter.checked_add(1).ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Counter overflow for domain {}", signature.domain),
                )
            })?,
            None => 1,
        };

        debug!(
            domain = %signature.domain,
            middle_present = signature.shape.middle_present,
            last_present = signature.shape.last_present,
            counter,
            "Resolved counter"
        );

        Ok(counter)
    }
}
