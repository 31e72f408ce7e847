//! User module - the stored record of a generated name pattern.

mod entity;

pub use entity::{NewUser, User};
