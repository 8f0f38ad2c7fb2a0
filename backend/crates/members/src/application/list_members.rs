//! List Members Use Case

use crate::domain::entity::member::Member;
use crate::domain::repository::MemberStore;
use crate::error::{MemberError, MemberResult, StoreError};
use std::sync::Arc;

/// List Members Use Case
pub struct ListMembersUseCase<S>
where
    S: MemberStore,
{
    store: Arc<S>,
}

impl<S> ListMembersUseCase<S>
where
    S: MemberStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> MemberResult<Vec<Member>> {
        match self.store.select_all().await {
            Ok(members) => Ok(members),
            Err(StoreError::NoData) => Err(MemberError::NoData),
            Err(e) => Err(e.into()),
        }
    }
}
