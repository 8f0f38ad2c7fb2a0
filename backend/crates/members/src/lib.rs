//! Club Member Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Member entity, value objects, data-access trait
//! - `application/` - Use cases and store configuration
//! - `infra/` - Hosted database (PostgREST) and in-memory stores
//! - `presentation/` - HTTP handlers
//!
//! ## Consistency Model
//! - The member table lives entirely in the external store; no in-process state
//! - Email uniqueness and record existence are checked with a separate read
//!   before each mutation, so concurrent requests can race past the check

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::StoreConfig;
pub use error::{ConfigError, MemberError, MemberResult, StoreError, StoreResult};
#[cfg(any(test, feature = "test-util"))]
pub use infra::memory::InMemoryMemberStore;
pub use infra::postgrest::PostgrestMemberStore;
pub use presentation::router::{members_router, members_router_generic};
