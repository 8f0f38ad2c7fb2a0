//! Member Name Value Object

use serde::{Deserialize, Serialize};

use crate::error::{MemberError, MemberResult};

/// Non-empty display name of a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberName(String);

impl MemberName {
    /// Create a new name; blank names are rejected, the text is kept as given
    pub fn new(name: impl Into<String>) -> MemberResult<Self> {
        let name: String = name.into();

        if name.trim().is_empty() {
            return Err(MemberError::Validation("Name cannot be empty".to_string()));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_kept_as_given() {
        assert_eq!(MemberName::new("  Ada Lovelace ").unwrap().as_str(), "  Ada Lovelace ");
    }

    #[test]
    fn test_name_empty() {
        assert!(MemberName::new("").is_err());
        assert!(MemberName::new("   ").is_err());
    }
}
