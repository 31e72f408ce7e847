//! User entity.
//!
//! A user is created once from a generated pattern and never updated. The
//! store owns id assignment; everything else is computed before insert.

use serde::Serialize;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::pattern::{NameParts, Signature};

/// Pattern fields computed for a record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub domain: String,
    pub counter: u32,
}

impl NewUser {
    /// Builds the record for `parts` at `domain` with an allocated counter.
    pub fn from_parts(parts: NameParts, domain: impl Into<String>, counter: u32) -> Self {
        Self {
            first_name: parts.first,
            middle_name: parts.middle,
            last_name: parts.last,
            domain: domain.into(),
            counter,
        }
    }
}

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub domain: String,
    pub counter: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Attaches store-assigned identity and timestamps to computed fields.
    pub fn from_new(id: UserId, new_user: NewUser, created_at: Timestamp) -> Self {
        Self {
            id,
            first_name: new_user.first_name,
            middle_name: new_user.middle_name,
            last_name: new_user.last_name,
            domain: new_user.domain,
            counter: new_user.counter,
            created_at,
            updated_at: created_at,
        }
    }

    /// Whether this record belongs to `signature`'s counter sequence.
    pub fn matches(&self, signature: &Signature) -> bool {
        signature.matches(
            self.middle_name.as_deref(),
            self.last_name.as_deref(),
            &self.domain,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pattern::NameShape;

    fn new_user(middle: Option<&str>, last: Option<&str>, domain: &str) -> NewUser {
        NewUser::from_parts(
            NameParts {
                first: "John".to_string(),
                middle: middle.map(str::to_string),
                last: last.map(str::to_string),
            },
            domain,
            1,
        )
    }

    #[test]
    fn from_parts_copies_name_fields() {
        let user = new_user(Some("Paul"), Some("Jones"), "acme.com");
        assert_eq!(user.first_name, "John");
        assert_eq!(user.middle_name.as_deref(), Some("Paul"));
        assert_eq!(user.last_name.as_deref(), Some("Jones"));
        assert_eq!(user.domain, "acme.com");
        assert_eq!(user.counter, 1);
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

    #[test]
    fn stored_user_matches_signature_of_same_shape_and_domain() {
        let user = User::from_new(
            UserId::new(1).unwrap(),
            new_user(None, Some("Smith"), "acme.com"),
            Timestamp::now(),
        );
        assert!(user.matches(&first_last_at("acme.com")));
        assert!(!user.matches(&first_last_at("other.org")));
    }

    #[test]
    fn empty_middle_name_still_counts_as_present() {
        let user = User::from_new(
            UserId::new(1).unwrap(),
            new_user(Some(""), Some("smith"), "acme.com"),
            Timestamp::now(),
        );
        assert!(!user.matches(&first_last_at("acme.com")));
    }

    #[test]
    fn stored_user_does_not_match_other_shape() {
        let user = User::from_new(
            UserId::new(1).unwrap(),
            new_user(Some("Paul"), Some("Jones"), "acme.com"),
            Timestamp::now(),
        );
        assert!(!user.matches(&first_last_at("acme.com")));
    }

    #[test]
    fn user_serializes_with_camel_case_fields() {
        let user = User::from_new(
            UserId::new(3).unwrap(),
            new_user(None, None, "acme.com"),
            Timestamp::now(),
        );
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["firstName"], "John");
        assert!(json["middleName"].is_null());
        assert!(json["lastName"].is_null());
        assert_eq!(json["counter"], 1);
    }
}
