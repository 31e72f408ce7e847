//! HTTP adapters - REST API implementations.

pub mod router;
pub mod users;

// Re-export key types for convenience
pub use router::build_router;
pub use users::{user_routes, UserApiError, UserAppState};
