//! Store Configuration
//!
//! Connection settings for the hosted member database. Read once at start-up
//! and passed into the store; never changed afterwards.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_KEY";
pub const TABLE_VAR: &str = "MEMBERS_TABLE";
pub const TIMEOUT_VAR: &str = "STORE_TIMEOUT_SECS";

/// Member store configuration
#[derive(Clone)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Access key sent as `apikey` and bearer token
    pub api_key: String,
    /// Member table name
    pub table: String,
    /// Per-request timeout of the HTTP client; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl StoreConfig {
    pub const DEFAULT_TABLE: &'static str = "club_members";

    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: Self::DEFAULT_TABLE.to_string(),
            timeout: None,
        }
    }

    /// Load from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let url = required(URL_VAR)?;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: URL_VAR,
                value: url,
            });
        }

        let mut config = Self::new(url, required(KEY_VAR)?);

        if let Some(table) = lookup(TABLE_VAR).filter(|t| !t.trim().is_empty()) {
            config.table = table.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::Invalid {
                    name: TIMEOUT_VAR,
                    value: raw,
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// REST endpoint of the member table
    pub fn table_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .field("timeout", &self.timeout)
            .finish()
    }
}
