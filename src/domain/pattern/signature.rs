//! Name shape and counter signature.

use serde::Serialize;

/// Presence pattern of the optional name parts.
///
/// The first name is always present, so only the middle and last parts vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NameShape {
    pub middle_present: bool,
    pub last_present: bool,
}

/// Groups records that share a counter sequence.
///
/// Two records belong to the same sequence when their names have the same
/// shape and they were generated for the same domain. The actual name values
/// do not participate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Signature {
    pub shape: NameShape,
    pub domain: String,
}

impl Signature {
    /// Creates a signature for a shape within a domain.
    pub fn new(shape: NameShape, domain: impl Into<String>) -> Self {
        Self {
            shape,
            domain: domain.into(),
        }
    }

    /// Whether a stored record with the given optional parts and domain
    /// falls into this signature.
    pub fn matches(&self, middle: Option<&str>, last: Option<&str>, domain: &str) -> bool {
        self.shape.middle_present == middle.is_some()
            && self.shape.last_present == last.is_some()
            && self.domain == domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_last() -> NameShape {
        NameShape {
            middle_present: false,
            last_present: true,
        }
    }

    #[test]
    fn matches_on_presence_not_value() {
        let signature = Signature::new(first_last(), "acme.com");
        assert!(signature.matches(None, Some("Smith"), "acme.com"));
        assert!(signature.matches(None, Some("Jones"), "acme.com"));
    }

    #[test]
    fn rejects_different_shape() {
        let signature = Signature::new(first_last(), "acme.com");
        assert!(!signature.matches(Some("Paul"), Some("Smith"), "acme.com"));
        assert!(!signature.matches(None, None, "acme.com"));
    }

    #[test]
    fn rejects_different_domain() {
        let signature = Signature::new(first_last(), "acme.com");
        assert!(!signature.matches(None, Some("Smith"), "acme.org"));
    }

    #[test]
    fn domain_comparison_is_exact() {
        let signature = Signature::new(first_last(), "acme.com");
        assert!(!signature.matches(None, Some("Smith"), "ACME.com"));
    }
}
