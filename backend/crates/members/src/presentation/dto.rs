//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

use crate::application::AddMemberInput;

/// Request for POST /members
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
    pub domain: String,
}

/// Request for PUT /members/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDomainRequest {
    pub domain: String,
}

impl From<CreateMemberRequest> for AddMemberInput {
    fn from(req: CreateMemberRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            domain: req.domain,
        }
    }
}
