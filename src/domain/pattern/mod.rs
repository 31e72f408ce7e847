//! Pattern module - the pure email-convention core.
//!
//! # Components
//!
//! - `name_split` - positional first/middle/last splitting shared by display
//!   names and email local-parts
//! - `signature` - presence shape and the per-domain counter signature
//! - `email_address` - local-part/domain decomposition
//! - `email_guess` - candidate address synthesis without persistence
//! - `syntax` - domain and email syntax rules for request validation
//!
//! Nothing here performs I/O; counter allocation against a store lives in
//! the application layer.

mod email_address;
mod email_guess;
mod error;
mod name_split;
mod signature;
mod syntax;

pub use email_address::EmailAddress;
pub use email_guess::guess_email;
pub use error::PatternError;
pub use name_split::{split_name, NameParts, FULL_NAME_DELIMITER, LOCAL_PART_DELIMITER};
pub use signature::{NameShape, Signature};
pub use syntax::{is_valid_domain, is_valid_email};
