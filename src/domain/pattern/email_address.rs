//! Decomposition of an address into local-part and domain.

use super::PatternError;

/// An address split at its last `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    local_part: String,
    domain: String,
}

impl EmailAddress {
    /// Splits `email` at the last `@`.
    ///
    /// Only the presence of the delimiter is checked here; syntax validation
    /// happens at the request boundary.
    pub fn parse(email: &str) -> Result<Self, PatternError> {
        let trimmed = email.trim();
        let (local_part, domain) = trimmed
            .rsplit_once('@')
            .ok_or_else(|| PatternError::InvalidEmailFormat(trimmed.to_string()))?;

        Ok(Self {
            local_part: local_part.to_string(),
            domain: domain.to_string(),
        })
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}
