//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Member, NewMember, MemberPatch)
//! - Domain value objects (Email, MemberName)
//! - Store trait (data-access interface)

pub mod entity;
pub mod repository;
pub mod value_object;
