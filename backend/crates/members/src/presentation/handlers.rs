//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::envelope::Envelope;
use kernel::error::app_error::AppError;
use kernel::extract::{Json, Path};
use std::sync::Arc;

use crate::application::{
    AddMemberUseCase, DeleteMemberUseCase, ListMembersUseCase, UpdateMemberDomainUseCase,
};
use crate::domain::entity::member::Member;
use crate::domain::repository::MemberStore;
use crate::error::MemberResult;
use crate::presentation::dto::{CreateMemberRequest, UpdateDomainRequest};

/// Shared state for member handlers
#[derive(Clone)]
pub struct MembersAppState<R>
where
    R: MemberStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<R>,
}

/// GET /members
pub async fn list_members<R>(
    State(state): State<MembersAppState<R>>,
) -> MemberResult<Json<Envelope<Vec<Member>>>>
where
    R: MemberStore + Clone + Send + Sync + 'static,
{
    let members = ListMembersUseCase::new(state.store.clone()).execute().await?;

    Ok(Json(Envelope::data(members)))
}

/// POST /members
pub async fn add_member<R>(
    State(state): State<MembersAppState<R>>,
    Json(req): Json<CreateMemberRequest>,
) -> MemberResult<impl IntoResponse>
where
    R: MemberStore + Clone + Send + Sync + 'static,
{
    let inserted = AddMemberUseCase::new(state.store.clone())
        .execute(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(Envelope::data(inserted))))
}

/// PUT /members/{id}
pub async fn update_member_domain<R>(
    State(state): State<MembersAppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateDomainRequest>,
) -> MemberResult<Json<Envelope<Vec<Member>>>>
where
    R: MemberStore + Clone + Send + Sync + 'static,
{
    let updated = UpdateMemberDomainUseCase::new(state.store.clone())
        .execute(&id, req.domain)
        .await?;

    Ok(Json(Envelope::data(updated)))
}

/// DELETE /members/{id}
pub async fn delete_member<R>(
    State(state): State<MembersAppState<R>>,
    Path(id): Path<String>,
) -> MemberResult<Json<Envelope>>
where
    R: MemberStore + Clone + Send + Sync + 'static,
{
    DeleteMemberUseCase::new(state.store.clone())
        .execute(&id)
        .await?;

    Ok(Json(Envelope::message("Member deleted successfully")))
}

/// Any path outside the members routes
pub async fn route_not_found() -> AppError {
    AppError::not_found("Not Found")
}

/// A members route hit with an unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("Method Not Allowed")
}
