//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - user records and signature lookups
//! - `connect` / `run_migrations` - pool and schema setup

mod pool;
mod user_repository;

pub use pool::{connect, run_migrations};
pub use user_repository::PostgresUserRepository;
