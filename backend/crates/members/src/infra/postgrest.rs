//! Hosted Database Store
//!
//! Talks to the member table through its PostgREST endpoint
//! (`{url}/rest/v1/{table}`).

use reqwest::{Client, RequestBuilder};

use crate::application::config::StoreConfig;
use crate::domain::entity::member::{Member, MemberPatch, NewMember};
use crate::domain::repository::{MemberField, MemberStore};
use crate::error::{StoreError, StoreResult};

/// Ask the store to echo affected rows back
const RETURN_REPRESENTATION: &str = "return=representation";

/// PostgREST-backed member store
#[derive(Clone)]
pub struct PostgrestMemberStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl PostgrestMemberStore {
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.table_endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn eq_filter(field: MemberField, value: &str) -> [(&'static str, String); 1] {
        [(field.column(), format!("eq.{}", value))]
    }

    /// Attach credentials, send, and decode the record list
    async fn execute(&self, request: RequestBuilder) -> StoreResult<Vec<Member>> {
        let response = request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %body, "Store request failed");
            return Err(StoreError::api(status.as_u16(), &body));
        }

        decode_rows(&body)
    }
}

/// Empty body or `null` means no result set
fn decode_rows(body: &str) -> StoreResult<Vec<Member>> {
    let body = body.trim();
    if body.is_empty() {
        return Err(StoreError::NoData);
    }

    let rows: Option<Vec<Member>> = serde_json::from_str(body)?;
    rows.ok_or(StoreError::NoData)
}

impl MemberStore for PostgrestMemberStore {
    async fn select_all(&self) -> StoreResult<Vec<Member>> {
        let request = self.client.get(&self.endpoint).query(&[("select", "*")]);

        self.execute(request).await
    }

    async fn select_where(&self, field: MemberField, value: &str) -> StoreResult<Vec<Member>> {
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "*")])
            .query(&Self::eq_filter(field, value));

        self.execute(request).await
    }

    async fn insert(&self, member: &NewMember) -> StoreResult<Vec<Member>> {
        let request = self
            .client
            .post(&self.endpoint)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(member);

        let rows = self.execute(request).await?;

        tracing::debug!(rows = rows.len(), "Insert response");

        Ok(rows)
    }

    async fn update_where(
        &self,
        field: MemberField,
        value: &str,
        patch: &MemberPatch,
    ) -> StoreResult<Vec<Member>> {
        let request = self
            .client
            .patch(&self.endpoint)
            .query(&Self::eq_filter(field, value))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(patch);

        self.execute(request).await
    }

    async fn delete_where(&self, field: MemberField, value: &str) -> StoreResult<Vec<Member>> {
        let request = self
            .client
            .delete(&self.endpoint)
            .query(&Self::eq_filter(field, value))
            .header("Prefer", RETURN_REPRESENTATION);

        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rows() {
        assert!(matches!(decode_rows(""), Err(StoreError::NoData)));
        assert!(matches!(decode_rows("null"), Err(StoreError::NoData)));
        assert!(decode_rows("[]").unwrap().is_empty());
        assert!(matches!(decode_rows("{\"oops\":1}"), Err(StoreError::Decode(_))));

        let rows = decode_rows(
            r#"[{"id":"6f1c0d3e-2b7a-4d41-9a55-0f6b8e2f1c9a","name":"Ada","email":"ada@x.org","domain":"cs"}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ada");
    }

    #[test]
    fn test_eq_filter() {
        let [(column, value)] = PostgrestMemberStore::eq_filter(MemberField::Email, "ada@x.org");
        assert_eq!(column, "email");
        assert_eq!(value, "eq.ada@x.org");
    }
}
