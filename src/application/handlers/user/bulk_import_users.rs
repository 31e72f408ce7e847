//! BulkImportUsers - Command handler for importing many rows in order.
//!
//! Rows are processed one at a time so that rows sharing a signature within
//! the same batch see each other's counters. A failing row is recorded and
//! the batch moves on.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::pattern::PatternGenerator;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::UserRepository;

/// Default upper bound on rows per batch.
pub const DEFAULT_MAX_IMPORT_ROWS: usize = 5_000;

/// One row of an import batch.
///
/// `email` wins when present; otherwise `full_name` and `domain` are used.
#[derive(Debug, Clone, Default)]
pub struct ImportRow {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub domain: Option<String>,
}

impl ImportRow {
    /// Row carrying only an address.
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Row carrying a display name and a domain.
    pub fn name_at(full_name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            domain: Some(domain.into()),
            ..Self::default()
        }
    }
}

/// Command to import a batch of rows.
#[derive(Debug, Clone)]
pub struct BulkImportUsersCommand {
    pub rows: Vec<ImportRow>,
}

/// Outcome of a single row. Rows are numbered from 1.
#[derive(Debug, Clone)]
pub enum RowOutcome {
    Imported { row: usize, id: UserId },
    Failed { row: usize, error: DomainError },
}

impl RowOutcome {
    pub fn row(&self) -> usize {
        match self {
            RowOutcome::Imported { row, .. } | RowOutcome::Failed { row, .. } => *row,
        }
    }

    pub fn is_imported(&self) -> bool {
        matches!(self, RowOutcome::Imported { .. })
    }
}

/// Result of an import, one outcome per input row in input order.
#[derive(Debug, Clone)]
pub struct BulkImportUsersResult {
    pub outcomes: Vec<RowOutcome>,
}

impl BulkImportUsersResult {
    pub fn imported_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_imported()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.imported_count()
    }
}

/// Handler for bulk imports.
pub struct BulkImportUsersHandler {
    generator: PatternGenerator,
    repository: Arc<dyn UserRepository>,
    max_rows: usize,
}

impl BulkImportUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>, max_rows: usize) -> Self {
        Self {
            generator: PatternGenerator::new(repository.clone()),
            repository,
            max_rows,
        }
    }

    /// Imports every row in order.
    ///
    /// # Errors
    ///
    /// Only a batch larger than the configured limit fails as a whole; row
    /// failures are reported in the result.
    pub async fn handle(
        &self,
        cmd: BulkImportUsersCommand,
    ) -> Result<BulkImportUsersResult, DomainError> {
        if cmd.rows.len() > self.max_rows {
            return Err(DomainError::validation(
                "rows",
                format!(
                    "Batch of {} rows exceeds the limit of {}",
                    cmd.rows.len(),
                    self.max_rows
                ),
            ));
        }

        let mut outcomes = Vec::with_capacity(cmd.rows.len());
        for (index, row) in cmd.rows.iter().enumerate() {
            let row_number = index + 1;
            let outcome = match self.import_row(row).await {
                Ok(id) => RowOutcome::Imported { row: row_number, id },
                Err(error) => {
                    warn!(row = row_number, error = %error, "Import row failed");
                    RowOutcome::Failed {
                        row: row_number,
                        error,
                    }
                }
            };
            outcomes.push(outcome);
        }

        let result = BulkImportUsersResult { outcomes };
        info!(
            imported = result.imported_count(),
            failed = result.failed_count(),
            "Bulk import finished"
        );

        Ok(result)
    }

    async fn import_row(&self, row: &ImportRow) -> Result<UserId, DomainError> {
        let new_user = match (non_blank(&row.email), non_blank(&row.full_name)) {
            (Some(email), _) => self.generator.from_email(email).await?,
            (None, Some(full_name)) => {
                let domain = non_blank(&row.domain)
                    .ok_or_else(|| DomainError::validation("domain", "Row has no domain"))?;
                self.generator.from_full_name(full_name, domain).await?
            }
            (None, None) => {
                return Err(DomainError::validation(
                    "email",
                    "Row has neither an email nor a fullname",
                ))
            }
        };

        let user = self.repository.insert(new_user).await?;
        Ok(user.id)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::pattern::Signature;
    use crate::domain::user::{NewUser, User};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Delegates to the in-memory store but fails inserts for one domain.
    struct FlakyRepository {
        inner: InMemoryUserRepository,
        failing_domain: &'static str,
        attempts: Mutex<usize>,
    }

    #[async_trait]
    impl UserRepository for FlakyRepository {
        async fn find_latest_by_signature(
            &self,
            signature: &Signature,
        ) -> Result<Option<User>, DomainError> {
            self.inner.find_latest_by_signature(signature).await
        }

        async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
            *self.attempts.lock().unwrap() += 1;
            if user.domain == self.failing_domain {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Write failed"));
            }
            self.inner.insert(user).await
        }

        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
            self.inner.find_by_id(id).await
        }

        async fn list_all(&self) -> Result<Vec<User>, DomainError> {
            self.inner.list_all().await
        }
    }

    fn handler(repo: Arc<dyn UserRepository>) -> BulkImportUsersHandler {
        BulkImportUsersHandler::new(repo, DEFAULT_MAX_IMPORT_ROWS)
    }

    #[tokio::test]
    async fn test_rows_sharing_signature_get_sequential_counters() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = handler(repo.clone());

        let result = handler
            .handle(BulkImportUsersCommand {
                rows: vec![
                    ImportRow::email("john.smith@acme.com"),
                    ImportRow::email("jane.doe@acme.com"),
                    ImportRow::name_at("Max Power", "acme.com"),
                ],
            })
            .await
            .unwrap();

        assert_eq!(result.imported_count(), 3);
        let counters: Vec<u32> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .rev()
            .map(|u| u.counter)
            .collect();
        assert_eq!(counters, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_failing_rows_do_not_abort_batch() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = handler(repo.clone());

        let result = handler
            .handle(BulkImportUsersCommand {
                rows: vec![
                    ImportRow::email("no-at-sign"),
                    ImportRow::default(),
                    ImportRow::email("john.smith@acme.com"),
                ],
            })
            .await
            .unwrap();

        assert_eq!(result.outcomes.len(), 3);
        assert_eq!(result.imported_count(), 1);
        assert_eq!(result.failed_count(), 2);

        match &result.outcomes[0] {
            RowOutcome::Failed { row, error } => {
                assert_eq!(*row, 1);
                assert_eq!(error.code, ErrorCode::MalformedEmail);
            }
            other => panic!("Expected failure, got {:?}", other),
        }
        match &result.outcomes[1] {
            RowOutcome::Failed { error, .. } => assert_eq!(error.code, ErrorCode::ValidationFailed),
            other => panic!("Expected failure, got {:?}", other),
        }
        assert!(result.outcomes[2].is_imported());
        assert_eq!(result.outcomes[2].row(), 3);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_isolated_to_its_row() {
        let repo = Arc::new(FlakyRepository {
            inner: InMemoryUserRepository::new(),
            failing_domain: "down.com",
            attempts: Mutex::new(0),
        });
        let handler = handler(repo.clone());

        let result = handler
            .handle(BulkImportUsersCommand {
                rows: vec![
                    ImportRow::email("a.b@down.com"),
                    ImportRow::email("a.b@up.com"),
                ],
            })
            .await
            .unwrap();

        assert!(!result.outcomes[0].is_imported());
        assert!(result.outcomes[1].is_imported());
        assert_eq!(*repo.attempts.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_name_row_without_domain_fails() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = handler(repo);

        let result = handler
            .handle(BulkImportUsersCommand {
                rows: vec![ImportRow {
                    full_name: Some("John Smith".to_string()),
                    ..ImportRow::default()
                }],
            })
            .await
            .unwrap();

        match &result.outcomes[0] {
            RowOutcome::Failed { error, .. } => {
                assert_eq!(error.details.get("field"), Some(&"domain".to_string()))
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_batch_is_ok() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let result = handler(repo)
            .handle(BulkImportUsersCommand { rows: vec![] })
            .await
            .unwrap();
        assert!(result.outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_batch_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = BulkImportUsersHandler::new(repo.clone(), 1);

        let err = handler
            .handle(BulkImportUsersCommand {
                rows: vec![ImportRow::email("a@x.io"), ImportRow::email("b@x.io")],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(repo.is_empty());
    }
}
