//! GuessEmail - Query handler for synthesizing a candidate address.

use crate::domain::foundation::DomainError;
use crate::domain::pattern::guess_email;

/// Query for the likely address of a person at a domain.
#[derive(Debug, Clone)]
pub struct GuessEmailQuery {
    pub full_name: String,
    pub domain: String,
}

/// Handler for email guesses. Stateless; no store is consulted.
#[derive(Debug, Clone, Default)]
pub struct GuessEmailHandler;

impl GuessEmailHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GuessEmailQuery) -> Result<String, DomainError> {
        Ok(guess_email(&query.full_name, &query.domain)?)
    }
}
