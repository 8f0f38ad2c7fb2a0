//! Add Member Use Case

use crate::domain::entity::member::{Member, NewMember};
use crate::domain::repository::{MemberField, MemberStore};
use crate::domain::value_object::{email::Email, member_name::MemberName};
use crate::error::{MemberError, MemberResult, StoreError, StoreResultExt};
use std::sync::Arc;

/// Input DTO for add member
#[derive(Debug, Clone)]
pub struct AddMemberInput {
    pub name: String,
    pub email: String,
    pub domain: String,
}

/// Add Member Use Case
///
/// The email check and the insert are two separate store calls; two
/// concurrent requests for the same email can both pass the check.
pub struct AddMemberUseCase<S>
where
    S: MemberStore,
{
    store: Arc<S>,
}

impl<S> AddMemberUseCase<S>
where
    S: MemberStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: AddMemberInput) -> MemberResult<Vec<Member>> {
        let new_member = NewMember {
            name: MemberName::new(input.name)?,
            email: Email::new(input.email)?,
            domain: input.domain,
        };

        // A missing result set counts as "no existing member"
        let existing = self
            .store
            .select_where(MemberField::Email, new_member.email.as_str())
            .await
            .or_empty()?;

        tracing::debug!(
            email = %new_member.email,
            matches = existing.len(),
            "Checked for existing member email"
        );

        if !existing.is_empty() {
            return Err(MemberError::EmailTaken);
        }

        let inserted = match self.store.insert(&new_member).await {
            Ok(rows) => rows,
            Err(StoreError::NoData) => return Err(MemberError::AddFailed),
            Err(e) => return Err(e.into()),
        };

        for member in &inserted {
            tracing::info!(member_id = %member.id, "Member added");
        }

        Ok(inserted)
    }
}
