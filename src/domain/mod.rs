//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `pattern` - Name splitting, signatures and email guessing
//! - `user` - The stored user record

pub mod foundation;
pub mod pattern;
pub mod user;
