//! Members Router

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::domain::repository::MemberStore;
use crate::infra::postgrest::PostgrestMemberStore;
use crate::presentation::handlers::{self, MembersAppState};

/// Create the members router backed by the hosted database
pub fn members_router(store: PostgrestMemberStore) -> Router {
    members_router_generic(store)
}

/// Create a members router for any store implementation
pub fn members_router_generic<R>(store: R) -> Router
where
    R: MemberStore + Clone + Send + Sync + 'static,
{
    let state = MembersAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route(
            "/members",
            get(handlers::list_members::<R>).post(handlers::add_member::<R>),
        )
        .route(
            "/members/{id}",
            put(handlers::update_member_domain::<R>).delete(handlers::delete_member::<R>),
        )
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}
