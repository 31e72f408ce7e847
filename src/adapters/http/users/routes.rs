//! Axum router configuration for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_user, bulk_import, get_user, guess_email, list_users, UserAppState};

/// Create the user API router, nested under `/api/users`.
///
/// # Routes
/// - `GET /` - List users, newest first
/// - `GET /:id` - Get one user
/// - `POST /add` - Store a user derived from an address
/// - `POST /bulkImport` - Store many users, reporting each row
/// - `POST /emailGuesser` - Guess an address (nothing is stored)
pub fn user_routes() -> Router<UserAppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
        .route("/add", post(add_user))
        .route("/bulkImport", post(bulk_import))
        .route("/emailGuesser", post(guess_email))
}
