//! Infrastructure Layer
//!
//! Store implementations for the member table.

#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod postgrest;
