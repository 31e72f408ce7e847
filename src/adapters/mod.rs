//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `memory` - Process-local user store
//! - `postgres` - PostgreSQL user store

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{build_router, UserAppState};
pub use memory::InMemoryUserRepository;
pub use postgres::PostgresUserRepository;
