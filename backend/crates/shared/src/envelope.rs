//! Response Envelope
//!
//! Every JSON response body has the shape
//! `{"success": bool, "data"?: any, "message"?: string}`.

use serde::Serialize;

/// Uniform JSON response wrapper
///
/// ## Examples
/// ```rust
/// use kernel::envelope::Envelope;
///
/// let ok = Envelope::data(vec![1, 2, 3]);
/// assert_eq!(
///     serde_json::to_value(&ok).unwrap(),
///     serde_json::json!({"success": true, "data": [1, 2, 3]})
/// );
///
/// let failed = Envelope::failure("Member not found");
/// assert_eq!(
///     serde_json::to_value(&failed).unwrap(),
///     serde_json::json!({"success": false, "message": "Member not found"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T = ()> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl Envelope {
    /// Successful response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Failed response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_envelope_omits_data() {
        let envelope = Envelope::message("Member deleted successfully");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": true, "message": "Member deleted successfully"})
        );
    }

    #[test]
    fn test_empty_data_is_still_serialized() {
        let envelope = Envelope::data(Vec::<String>::new());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": true, "data": []})
        );
    }
}
