//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and the member store.
//! Contains use case implementations.

pub mod add_member;
pub mod config;
pub mod delete_member;
pub mod list_members;
pub mod update_member_domain;

pub use add_member::{AddMemberInput, AddMemberUseCase};
pub use delete_member::DeleteMemberUseCase;
pub use list_members::ListMembersUseCase;
pub use update_member_domain::UpdateMemberDomainUseCase;

use kernel::id::MemberId;

use crate::error::{MemberError, MemberResult};

/// Parse a path id; the id column is UUID typed so nothing else can match
pub(crate) fn parse_member_id(id: &str) -> MemberResult<MemberId> {
    id.trim()
        .parse()
        .map_err(|_| MemberError::Validation(format!("Invalid member id: {}", id)))
}
