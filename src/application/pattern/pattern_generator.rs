//! PatternGenerator - name split plus counter allocation.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::pattern::{
    split_name, EmailAddress, PatternError, Signature, FULL_NAME_DELIMITER, LOCAL_PART_DELIMITER,
};
use crate::domain::user::NewUser;
use crate::ports::UserRepository;

use super::CounterResolver;

/// Computes the record to store for an address or a name at a domain.
///
/// The split step is pure, so the same input always produces the same name
/// parts; only the counter depends on what the store already holds.
#[derive(Clone)]
pub struct PatternGenerator {
    counter_resolver: CounterResolver,
}

impl PatternGenerator {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            counter_resolver: CounterResolver::new(repository),
        }
    }

    /// Generates the record for an address of the form `local@domain`.
    ///
    /// The local-part is split on dots.
    ///
    /// # Errors
    ///
    /// - `MalformedEmail` if `email` has no `@`
    /// - `EmptyInput` if the local-part or the domain is blank
    pub async fn from_email(&self, email: &str) -> Result<NewUser, DomainError> {
        let address = EmailAddress::parse(email)?;
        self.generate(
            address.local_part(),
            LOCAL_PART_DELIMITER,
            address.domain(),
            "email",
        )
        .await
    }

    /// Generates the record for a display name at `domain`.
    ///
    /// The name is split on spaces.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if the name or the domain is blank
    pub async fn from_full_name(
        &self,
        full_name: &str,
        domain: &str,
    ) -> Result<NewUser, DomainError> {
        self.generate(full_name, FULL_NAME_DELIMITER, domain, "fullname")
            .await
    }

    async fn generate(
        &self,
        name: &str,
        delimiter: char,
        domain: &str,
        name_field: &'static str,
    ) -> Result<NewUser, DomainError> {
        if name.trim().is_empty() {
            return Err(PatternError::empty(name_field).into());
        }
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(PatternError::empty("domain").into());
        }

        let parts = split_name(name, delimiter);
        let signature = Signature::new(parts.shape(), domain);
        let counter = self.counter_resolver.next_counter(&signature).await?;

        Ok(NewUser::from_parts(parts, domain, counter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::ErrorCode;

    fn generator() -> (Arc<InMemoryUserRepository>, PatternGenerator) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let generator = PatternGenerator::new(repo.clone());
        (repo, generator)
    }

    #[tokio::test]
    async fn email_with_two_parts_yields_first_and_last() {
        let (_, generator) = generator();
        let user = generator.from_email("john.smith@acme.com").await.unwrap();

        assert_eq!(user.first_name, "john");
        assert_eq!(user.middle_name, None);
        assert_eq!(user.last_name.as_deref(), Some("smith"));
        assert_eq!(user.domain, "acme.com");
        assert_eq!(user.counter, 1);
    }

    #[tokio::test]
    async fn email_with_many_parts_collapses_middle() {
        let (_, generator) = generator();
        let user = generator.from_email("a.b.c.d@acme.com").await.unwrap();

        assert_eq!(user.first_name, "a");
        assert_eq!(user.middle_name.as_deref(), Some("bc"));
        assert_eq!(user.last_name.as_deref(), Some("d"));
    }

    #[tokio::test]
    async fn full_name_is_split_on_spaces() {
        let (_, generator) = generator();
        let user = generator
            .from_full_name("John Paul Jones", "band.com")
            .await
            .unwrap();

        assert_eq!(user.first_name, "John");
        assert_eq!(user.middle_name.as_deref(), Some("Paul"));
        assert_eq!(user.last_name.as_deref(), Some("Jones"));
        assert_eq!(user.domain, "band.com");
    }

    #[tokio::test]
    async fn counter_continues_sequence_of_same_shape_and_domain() {
        let (repo, generator) = generator();
        let first = generator.from_email("john.smith@acme.com").await.unwrap();
        repo.insert(first).await.unwrap();

        let second = generator.from_email("jane.doe@acme.com").await.unwrap();
        assert_eq!(second.counter, 2);
    }

    #[tokio::test]
    async fn other_shapes_and_domains_start_their_own_sequence() {
        let (repo, generator) = generator();
        repo.insert(generator.from_email("john.smith@acme.com").await.unwrap())
            .await
            .unwrap();

        let other_shape = generator.from_email("john@acme.com").await.unwrap();
        let other_domain = generator.from_email("john.smith@other.com").await.unwrap();
        assert_eq!(other_shape.counter, 1);
        assert_eq!(other_domain.counter, 1);
    }

    #[tokio::test]
    async fn email_and_name_paths_share_sequences() {
        let (repo, generator) = generator();
        repo.insert(generator.from_email("john.smith@acme.com").await.unwrap())
            .await
            .unwrap();

        let by_name = generator
            .from_full_name("Jane Doe", "acme.com")
            .await
            .unwrap();
        assert_eq!(by_name.counter, 2);
    }

    #[tokio::test]
    async fn doubled_dot_joins_first_middle_last_sequence() {
        let (repo, generator) = generator();
        repo.insert(generator.from_email("john.smith@acme.com").await.unwrap())
            .await
            .unwrap();
        repo.insert(generator.from_email("john.paul.jones@acme.com").await.unwrap())
            .await
            .unwrap();

        let user = generator.from_email("john..smith@acme.com").await.unwrap();
        assert_eq!(user.middle_name.as_deref(), Some(""));
        assert_eq!(user.last_name.as_deref(), Some("smith"));
        assert_eq!(user.counter, 2);
    }

    #[tokio::test]
    async fn split_is_stable_across_calls() {
        let (repo, generator) = generator();
        let first = generator.from_email("mary.jane.watson@x.com").await.unwrap();
        repo.insert(first.clone()).await.unwrap();
        let second = generator.from_email("mary.jane.watson@x.com").await.unwrap();

        assert_eq!(first.first_name, second.first_name);
        assert_eq!(first.middle_name, second.middle_name);
        assert_eq!(first.last_name, second.last_name);
        assert_eq!(first.counter + 1, second.counter);
    }

    #[tokio::test]
    async fn missing_at_sign_is_malformed_email() {
        let (_, generator) = generator();
        let err = generator.from_email("john.smith").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedEmail);
    }

    #[tokio::test]
    async fn blank_local_part_is_empty_input() {
        let (_, generator) = generator();
        let err = generator.from_email("@acme.com").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyInput);
        assert_eq!(err.details.get("field"), Some(&"email".to_string()));
    }

    #[tokio::test]
    async fn blank_domain_is_empty_input() {
        let (_, generator) = generator();
        let err = generator.from_full_name("John Smith", "  ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyInput);
        assert_eq!(err.details.get("field"), Some(&"domain".to_string()));
    }
}
