//! In-memory adapters - process-local implementations of repository ports.

mod user_repository;

pub use user_repository::InMemoryUserRepository;
