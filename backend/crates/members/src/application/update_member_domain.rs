//! Update Member Domain Use Case

use crate::application::parse_member_id;
use crate::domain::entity::member::{Member, MemberPatch};
use crate::domain::repository::{MemberField, MemberStore};
use crate::error::{MemberError, MemberResult, StoreResultExt};
use std::sync::Arc;

/// Update Member Domain Use Case
///
/// Only `domain` can change; `name` and `email` are fixed at creation.
pub struct UpdateMemberDomainUseCase<S>
where
    S: MemberStore,
{
    store: Arc<S>,
}

impl<S> UpdateMemberDomainUseCase<S>
where
    S: MemberStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: &str, domain: String) -> MemberResult<Vec<Member>> {
        let member_id = parse_member_id(id)?.to_string();

        let existing = self
            .store
            .select_where(MemberField::Id, &member_id)
            .await
            .or_empty()?;
        if existing.is_empty() {
            return Err(MemberError::NotFound);
        }

        let updated = self
            .store
            .update_where(MemberField::Id, &member_id, &MemberPatch::domain(domain))
            .await
            .or_empty()?;

        // The row vanished between the check and the update
        if updated.is_empty() {
            tracing::warn!(member_id = %member_id, "Update matched no rows after existence check");
            return Err(MemberError::UpdateFailed);
        }

        tracing::info!(member_id = %member_id, "Member domain updated");

        Ok(updated)
    }
}
