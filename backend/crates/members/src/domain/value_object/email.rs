//! Email Value Object
//!
//! Represents a syntactically valid email address.
//! Deliverability is never checked.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{MemberError, MemberResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Non-alphanumeric characters allowed in an unquoted local part
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Email address value object
///
/// `Deserialize` does not validate: it is used for rows coming back from the
/// store, which were validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    ///
    /// The domain part is lower-cased; the local part is kept as given.
    pub fn new(email: impl Into<String>) -> MemberResult<Self> {
        let email: String = email.into();
        let email = email.trim();

        if email.is_empty() {
            return Err(invalid("Email cannot be empty"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(invalid(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Err(invalid("Invalid email format"));
        };

        if !Self::is_valid_local(local) || !Self::is_valid_domain(domain) {
            return Err(invalid("Invalid email format"));
        }

        Ok(Self(format!("{}@{}", local, domain.to_ascii_lowercase())))
    }

    fn is_valid_local(local: &str) -> bool {
        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
            return false;
        }

        // Unquoted dot-atom only (RFC 5322)
        if !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || ATEXT_SPECIALS.contains(c))
        {
            return false;
        }

        !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
    }

    fn is_valid_domain(domain: &str) -> bool {
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the domain part of the email
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }
}

fn invalid(message: impl Into<String>) -> MemberError {
    MemberError::Validation(message.into())
}

impl FromStr for Email {
    type Err = MemberError;

    fn from_str(s: &str) -> MemberResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("ada@x.org").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  padded@example.com ").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@example..com").is_err());
        assert!(Email::new("user@-example.com").is_err());
        assert!(Email::new("us er@example.com").is_err());
        assert!(Email::new(".user@example.com").is_err());
        assert!(Email::new("user.@example.com").is_err());
        assert!(Email::new("us..er@example.com").is_err());
    }

    #[test]
    fn test_email_local_part_rejects_non_atext() {
        for email in [
            "a<b>@x.org",
            "a\"b@x.org",
            "a,b@x.org",
            "a(b)@x.org",
            "a\\b@x.org",
            "a;b@x.org",
            "a:b@x.org",
            "a[b]@x.org",
        ] {
            assert!(Email::new(email).is_err(), "accepted {email}");
        }
    }

    #[test]
    fn test_email_local_part_accepts_atext_specials() {
        assert!(Email::new("o'brien@x.org").is_ok());
        assert!(Email::new("a!#$%&'*+-/=?^_`{|}~z@x.org").is_ok());
    }

    #[test]
    fn test_email_too_long() {
        let local = "a".repeat(65);
        assert!(Email::new(format!("{local}@example.com")).is_err());

        let domain = format!("{}.com", "d".repeat(250));
        assert!(Email::new(format!("a@{domain}")).is_err());
    }

    #[test]
    fn test_email_domain_lowercased_local_kept() {
        let email = Email::new("Ada.Lovelace@Example.ORG").unwrap();
        assert_eq!(email.as_str(), "Ada.Lovelace@example.org");
        assert_eq!(email.domain(), "example.org");
    }

    #[test]
    fn test_email_error_is_validation() {
        assert!(matches!(
            Email::new("nope"),
            Err(MemberError::Validation(msg)) if msg == "Invalid email format"
        ));
    }
}
