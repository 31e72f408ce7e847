//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `UserRepository` - Counter lookup and record persistence

mod user_repository;

pub use user_repository::UserRepository;
