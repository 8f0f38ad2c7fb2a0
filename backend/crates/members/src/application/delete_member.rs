//! Delete Member Use Case

use crate::application::parse_member_id;
use crate::domain::repository::{MemberField, MemberStore};
use crate::error::{MemberError, MemberResult, StoreResultExt};
use std::sync::Arc;

/// Delete Member Use Case
pub struct DeleteMemberUseCase<S>
where
    S: MemberStore,
{
    store: Arc<S>,
}

impl<S> DeleteMemberUseCase<S>
where
    S: MemberStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the number of deleted rows
    pub async fn execute(&self, id: &str) -> MemberResult<usize> {
        let member_id = parse_member_id(id)?.to_string();

        let existing = self
            .store
            .select_where(MemberField::Id, &member_id)
            .await
            .or_empty()?;
        if existing.is_empty() {
            return Err(MemberError::NotFound);
        }

        let deleted = self
            .store
            .delete_where(MemberField::Id, &member_id)
            .await
            .or_empty()?;

        if deleted.is_empty() {
            tracing::warn!(member_id = %member_id, "Delete matched no rows after existence check");
            return Err(MemberError::DeleteFailed);
        }

        tracing::info!(member_id = %member_id, "Member deleted");

        Ok(deleted.len())
    }
}
