//! User application handlers.
//!
//! Command and query handlers for user records and email guesses.

mod add_user;
mod bulk_import_users;
mod get_user;
mod guess_email;
mod list_users;

pub use add_user::{AddUserCommand, AddUserHandler, AddUserResult};
pub use bulk_import_users::{
    BulkImportUsersCommand, BulkImportUsersHandler, BulkImportUsersResult, ImportRow, RowOutcome,
    DEFAULT_MAX_IMPORT_ROWS,
};
pub use get_user::{GetUserHandler, GetUserQuery};
pub use guess_email::{GuessEmailHandler, GuessEmailQuery};
pub use list_users::ListUsersHandler;
