//! Store Traits
//!
//! Data-access interface over the member table. Implementations live in the
//! infrastructure layer and perform no business validation.

use crate::domain::entity::member::{Member, MemberPatch, NewMember};
use crate::error::StoreResult;

/// Columns that can be used as an equality filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Id,
    Email,
}

impl MemberField {
    /// Column name in the member table
    pub const fn column(&self) -> &'static str {
        match self {
            MemberField::Id => "id",
            MemberField::Email => "email",
        }
    }
}

/// Member store trait
///
/// Every operation either returns a (possibly empty) list of records or a
/// [`StoreError`](crate::error::StoreError). `StoreError::NoData` means the
/// store produced no result set at all.
#[trait_variant::make(MemberStore: Send)]
pub trait LocalMemberStore {
    /// All records
    async fn select_all(&self) -> StoreResult<Vec<Member>>;

    /// Records whose `field` equals `value`
    async fn select_where(&self, field: MemberField, value: &str) -> StoreResult<Vec<Member>>;

    /// Insert one record; returns the inserted rows with their assigned ids
    async fn insert(&self, member: &NewMember) -> StoreResult<Vec<Member>>;

    /// Patch records whose `field` equals `value`; returns the updated rows
    async fn update_where(
        &self,
        field: MemberField,
        value: &str,
        patch: &MemberPatch,
    ) -> StoreResult<Vec<Member>>;

    /// Delete records whose `field` equals `value`; returns the deleted rows
    async fn delete_where(&self, field: MemberField, value: &str) -> StoreResult<Vec<Member>>;
}
