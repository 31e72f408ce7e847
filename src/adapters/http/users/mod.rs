//! HTTP adapter for user endpoints.
//!
//! Exposes user storage and address guessing via REST API:
//! - `GET /api/users` - List users
//! - `GET /api/users/:id` - Get one user
//! - `POST /api/users/add` - Add a user from an address
//! - `POST /api/users/bulkImport` - Import spreadsheet rows
//! - `POST /api/users/emailGuesser` - Guess an address

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{UserApiError, UserAppState};
pub use routes::user_routes;
