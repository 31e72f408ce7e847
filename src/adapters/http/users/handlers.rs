//! HTTP handlers for user endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::error;

use crate::application::handlers::user::{
    AddUserCommand, AddUserHandler, BulkImportUsersCommand, BulkImportUsersHandler,
    GetUserHandler, GetUserQuery, GuessEmailHandler, GuessEmailQuery, ListUsersHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserRepository;

use super::dto::{
    AddUserRequest, ApiIndexResponse, BulkImportRequest, ErrorResponse, FieldError,
    GuessEmailRequest, GuessEmailResponse, ImportRowResponse, SuccessResponse, UserResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct UserAppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub max_import_rows: usize,
}

impl UserAppState {
    pub fn new(user_repository: Arc<dyn UserRepository>, max_import_rows: usize) -> Self {
        Self {
            user_repository,
            max_import_rows,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn add_user_handler(&self) -> AddUserHandler {
        AddUserHandler::new(self.user_repository.clone())
    }

    pub fn bulk_import_handler(&self) -> BulkImportUsersHandler {
        BulkImportUsersHandler::new(self.user_repository.clone(), self.max_import_rows)
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.user_repository.clone())
    }

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.user_repository.clone())
    }

    pub fn guess_email_handler(&self) -> GuessEmailHandler {
        GuessEmailHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api - Service banner
pub async fn api_index() -> impl IntoResponse {
    Json(ApiIndexResponse::current())
}

/// GET /api/users - List every user, newest first
pub async fn list_users(
    State(state): State<UserAppState>,
) -> Result<impl IntoResponse, UserApiError> {
    let users = state.list_users_handler().handle().await?;
    let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(SuccessResponse::new(data)))
}

/// GET /api/users/:id - Get one user
pub async fn get_user(
    State(state): State<UserAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, UserApiError> {
    let id: UserId = id.parse().map_err(DomainError::from)?;

    let user = state.get_user_handler().handle(GetUserQuery { id }).await?;
    Ok(Json(SuccessResponse::new(UserResponse::from(user))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/users/add - Store a user derived from an address
pub async fn add_user(
    State(state): State<UserAppState>,
    payload: Result<Json<AddUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, UserApiError> {
    let Json(request) = payload?;
    request.validate().map_err(UserApiError::Validation)?;

    let cmd = AddUserCommand {
        full_name: request.fullname,
        email: request.email,
    };
    let result = state.add_user_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(UserResponse::from(result.user))),
    ))
}

/// POST /api/users/bulkImport - Store many users, reporting each row
pub async fn bulk_import(
    State(state): State<UserAppState>,
    payload: Result<Json<BulkImportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, UserApiError> {
    let Json(request) = payload?;

    let cmd = BulkImportUsersCommand {
        rows: request.rows.into_iter().map(Into::into).collect(),
    };
    let result = state.bulk_import_handler().handle(cmd).await?;

    let data: Vec<ImportRowResponse> = result
        .outcomes
        .into_iter()
        .map(ImportRowResponse::from)
        .collect();
    Ok(Json(SuccessResponse::new(data)))
}

/// POST /api/users/emailGuesser - Guess the address of a person at a domain
pub async fn guess_email(
    State(state): State<UserAppState>,
    payload: Result<Json<GuessEmailRequest>, JsonRejection>,
) -> Result<impl IntoResponse, UserApiError> {
    let Json(request) = payload?;
    request.validate().map_err(UserApiError::Validation)?;

    let query = GuessEmailQuery {
        full_name: request.fullname,
        domain: request.domain,
    };
    let email = state.guess_email_handler().handle(query)?;

    Ok(Json(SuccessResponse::new(GuessEmailResponse { email })))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// API error type that converts request and domain errors to HTTP responses.
#[derive(Debug)]
pub enum UserApiError {
    /// Body missing, not JSON, or not the expected shape.
    Body(JsonRejection),
    /// Request fields violated one or more rules.
    Validation(Vec<FieldError>),
    Domain(DomainError),
}

impl From<JsonRejection> for UserApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl From<DomainError> for UserApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for UserApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            UserApiError::Body(JsonRejection::MissingJsonContentType(_)) => (
                StatusCode::NOT_ACCEPTABLE,
                ErrorResponse::new("UNSUPPORTED_CONTENT_TYPE", "Expects application/json"),
            ),
            UserApiError::Body(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_JSON", rejection.body_text()),
            ),
            UserApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_errors(
                    ErrorCode::ValidationFailed.to_string(),
                    "Request validation failed",
                    errors,
                ),
            ),
            UserApiError::Domain(err) => domain_error_response(err),
        };

        (status, Json(body)).into_response()
    }
}

fn domain_error_response(err: DomainError) -> (StatusCode, ErrorResponse) {
    let code = err.code.to_string();
    match err.code {
        ErrorCode::ValidationFailed | ErrorCode::EmptyInput => {
            let errors = err
                .details
                .get("field")
                .map(|field| vec![FieldError::new(field.clone(), err.message.clone())])
                .unwrap_or_default();
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_errors(code, err.message, errors),
            )
        }
        ErrorCode::UserNotFound => (StatusCode::NOT_FOUND, ErrorResponse::new(code, err.message)),
        ErrorCode::MalformedEmail => {
            error!(error = %err, "Address passed validation but could not be split");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(code, INTERNAL_MESSAGE),
            )
        }
        ErrorCode::DatabaseError | ErrorCode::InternalError => {
            error!(error = %err, "Request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(code, INTERNAL_MESSAGE),
            )
        }
    }
}
