//! HTTP DTOs (Data Transfer Objects) for user endpoints.
//!
//! These types define the JSON request/response structure for the user API
//! and carry the boundary validation rules. Only requests that pass
//! `validate()` reach the application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::user::{ImportRow, RowOutcome};
use crate::domain::pattern::{is_valid_domain, is_valid_email};
use crate::domain::user::User;

const INVALID_FULLNAME: &str = "Please enter a valid fullname.";
const INVALID_EMAIL: &str = "Please enter a valid email.";
const INVALID_DOMAIN: &str = "Please enter a valid domain.";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to add a user from an address.
///
/// Missing fields deserialize as empty strings so that they fail validation
/// with a field-level message instead of a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct AddUserRequest {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
}

impl AddUserRequest {
    /// Collects every violated rule.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.fullname.trim().is_empty() {
            errors.push(FieldError::new("fullname", INVALID_FULLNAME));
        }
        if !is_valid_email(self.email.trim()) {
            errors.push(FieldError::new("email", INVALID_EMAIL));
        }
        into_result(errors)
    }
}

/// Request to guess an address from a name and a domain.
#[derive(Debug, Clone, Deserialize)]
pub struct GuessEmailRequest {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub domain: String,
}

impl GuessEmailRequest {
    /// Collects every violated rule.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.fullname.trim().is_empty() {
            errors.push(FieldError::new("fullname", INVALID_FULLNAME));
        }
        if !is_valid_domain(self.domain.trim()) {
            errors.push(FieldError::new("domain", INVALID_DOMAIN));
        }
        into_result(errors)
    }
}

/// Request to import rows extracted from a spreadsheet.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkImportRequest {
    #[serde(default)]
    pub rows: Vec<ImportRowRequest>,
}

/// One import row. Spreadsheet column headers are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportRowRequest {
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    #[serde(default, alias = "Fullname", alias = "fullName")]
    pub fullname: Option<String>,
    #[serde(default, alias = "Domain")]
    pub domain: Option<String>,
}

impl From<ImportRowRequest> for ImportRow {
    fn from(row: ImportRowRequest) -> Self {
        Self {
            email: row.email,
            full_name: row.fullname,
            domain: row.domain,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Envelope for successful responses.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T> {
    pub response: &'static str,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            response: "success",
            data,
        }
    }
}

/// A stored user as exposed over HTTP.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub domain: String,
    pub counter: u32,
    /// ISO 8601
    pub created_at: String,
    /// ISO 8601
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            first_name: user.first_name,
            middle_name: user.middle_name,
            last_name: user.last_name,
            domain: user.domain,
            counter: user.counter,
            created_at: user.created_at.as_datetime().to_rfc3339(),
            updated_at: user.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Guessed address.
#[derive(Debug, Clone, Serialize)]
pub struct GuessEmailResponse {
    pub email: String,
}

/// Outcome of one import row.
#[derive(Debug, Clone, Serialize)]
pub struct ImportRowResponse {
    pub row: usize,
    pub response: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<RowOutcome> for ImportRowResponse {
    fn from(outcome: RowOutcome) -> Self {
        match outcome {
            RowOutcome::Imported { row, id } => Self {
                row,
                response: "success",
                id: Some(id.value()),
                error_code: None,
                message: None,
            },
            RowOutcome::Failed { row, error } => Self {
                row,
                response: "error",
                id: None,
                error_code: Some(error.code.to_string()),
                message: Some(error.message),
            },
        }
    }
}

/// Service banner returned by `GET /api`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiIndexResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: ApiVersion,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiVersion {
    pub version_number: String,
}

impl ApiIndexResponse {
    pub fn current() -> Self {
        Self {
            status: "success",
            message: "Email Pattern API",
            data: ApiVersion {
                version_number: format!("v{}", env!("CARGO_PKG_VERSION")),
            },
        }
    }
}

/// A violated rule on a single request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            msg: msg.into(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub response: &'static str,
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Field-level violations (validation failures only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            response: "error",
            error_code: error_code.into(),
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Create an error response listing field violations.
    pub fn with_errors(
        error_code: impl Into<String>,
        message: impl Into<String>,
        errors: Vec<FieldError>,
    ) -> Self {
        Self {
            errors,
            ..Self::new(error_code, message)
        }
    }
}

fn into_result(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
