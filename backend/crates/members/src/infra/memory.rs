//! In-Memory Store
//!
//! Process-local implementation of the store contract. Ids are assigned on
//! insert like the hosted table does.

use kernel::id::MemberId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::member::{Member, MemberPatch, NewMember};
use crate::domain::repository::{MemberField, MemberStore};
use crate::error::StoreResult;

/// In-memory member store
#[derive(Clone, Default)]
pub struct InMemoryMemberStore {
    rows: Arc<RwLock<Vec<Member>>>,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

fn matches(member: &Member, field: MemberField, value: &str) -> bool {
    match field {
        MemberField::Id => member.id.to_string() == value,
        MemberField::Email => member.email.as_str() == value,
    }
}

impl MemberStore for InMemoryMemberStore {
    async fn select_all(&self) -> StoreResult<Vec<Member>> {
        Ok(self.rows.read().await.clone())
    }

    async fn select_where(&self, field: MemberField, value: &str) -> StoreResult<Vec<Member>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|m| matches(m, field, value))
            .cloned()
            .collect())
    }

    async fn insert(&self, member: &NewMember) -> StoreResult<Vec<Member>> {
        let stored = member.clone().into_member(MemberId::new());
        self.rows.write().await.push(stored.clone());
        Ok(vec![stored])
    }

    async fn update_where(
        &self,
        field: MemberField,
        value: &str,
        patch: &MemberPatch,
    ) -> StoreResult<Vec<Member>> {
        let mut rows = self.rows.write().await;
        let mut updated = Vec::new();
        for member in rows.iter_mut().filter(|m| matches(m, field, value)) {
            patch.apply(member);
            updated.push(member.clone());
        }
        Ok(updated)
    }

    async fn delete_where(&self, field: MemberField, value: &str) -> StoreResult<Vec<Member>> {
        let mut rows = self.rows.write().await;
        let (deleted, kept): (Vec<Member>, Vec<Member>) =
            rows.drain(..).partition(|m| matches(m, field, value));
        *rows = kept;
        Ok(deleted)
    }
}
