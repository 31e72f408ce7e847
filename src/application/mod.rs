//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (add, bulk import) write; query handlers (get, list,
//! guess) read. Store-dependent pattern services live in `pattern`.

pub mod handlers;
pub mod pattern;

pub use handlers::user::{
    AddUserCommand, AddUserHandler, AddUserResult, BulkImportUsersCommand, BulkImportUsersHandler,
    BulkImportUsersResult, GetUserHandler, GetUserQuery, GuessEmailHandler, GuessEmailQuery,
    ImportRow, ListUsersHandler, RowOutcome,
};
pub use pattern::{CounterResolver, PatternGenerator};
