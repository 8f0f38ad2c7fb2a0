//! Member Entity
//!
//! The sole persisted record: one club member.

use kernel::id::MemberId;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_object::{email::Email, member_name::MemberName};

/// Member record as stored
///
/// Extra columns returned by the store (timestamps etc.) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Assigned by the store on insert, immutable afterwards
    pub id: MemberId,
    pub name: String,
    /// Unique across members (checked before insert)
    pub email: Email,
    /// Free-form; a `null` or missing column reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domain: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Validated fields for a member that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMember {
    pub name: MemberName,
    pub email: Email,
    pub domain: String,
}

/// Partial update; only `domain` is mutable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemberPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl MemberPatch {
    pub fn domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
        }
    }

    /// Apply the patch in place
    pub fn apply(&self, member: &mut Member) {
        if let Some(domain) = &self.domain {
            member.domain = domain.clone();
        }
    }
}

impl NewMember {
    /// Materialize a stored record with the assigned id
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name.as_str().to_string(),
            email: self.email,
            domain: self.domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ada() -> NewMember {
        NewMember {
            name: MemberName::new("Ada").unwrap(),
            email: Email::new("ada@x.org").unwrap(),
            domain: "cs".to_string(),
        }
    }

    #[test]
    fn test_new_member_insert_body() {
        assert_eq!(
            serde_json::to_value(ada()).unwrap(),
            json!({"name": "Ada", "email": "ada@x.org", "domain": "cs"})
        );
    }

    #[test]
    fn test_patch_only_touches_domain() {
        let mut member = ada().into_member(MemberId::new());
        MemberPatch::domain("math").apply(&mut member);
        assert_eq!(member.domain, "math");
        assert_eq!(member.name, "Ada");
        assert_eq!(member.email.as_str(), "ada@x.org");

        MemberPatch::default().apply(&mut member);
        assert_eq!(member.domain, "math");
    }

    #[test]
    fn test_empty_patch_serializes_empty() {
        assert_eq!(serde_json::to_value(MemberPatch::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_member_row_ignores_extra_columns() {
        let row = json!({
            "id": "6f1c0d3e-2b7a-4d41-9a55-0f6b8e2f1c9a",
            "name": "Ada",
            "email": "ada@x.org",
            "domain": "cs",
            "created_at": "2024-01-01T00:00:00+00:00"
        });
        let member: Member = serde_json::from_value(row).unwrap();
        assert_eq!(member.id.to_string(), "6f1c0d3e-2b7a-4d41-9a55-0f6b8e2f1c9a");
        assert_eq!(member.domain, "cs");
    }

    #[test]
    fn test_member_row_with_null_or_missing_domain() {
        let rows = json!([
            {"id": "6f1c0d3e-2b7a-4d41-9a55-0f6b8e2f1c9a", "name": "Ada", "email": "ada@x.org", "domain": null},
            {"id": "7a2d1e4f-3c8b-4e52-8b66-1a7c9f3a2d0b", "name": "Emmy", "email": "emmy@x.org"}
        ]);
        let members: Vec<Member> = serde_json::from_value(rows).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].domain, "");
        assert_eq!(members[1].domain, "");
    }
}
