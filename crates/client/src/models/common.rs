//! Shared response models.

use serde::Deserialize;

/// Acknowledgement returned by create and delete operations.
#[derive(Debug, Clone, Deserialize)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}

/// Top-level error body returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorPayload,
    #[serde(default)]
    pub status: Option<u16>,
}

/// The `error` field is a structured cause on current versions and a bare
/// string on some older endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Structured(ErrorCause),
    Message(String),
}

/// Structured error cause.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorCause {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub reason: Option<String>,
    #[serde(default)]
    pub root_cause: Vec<ErrorCause>,
}

impl ErrorResponse {
    /// Machine-readable error type, when the structured form was returned.
    pub fn error_type(&self) -> Option<String> {
        match &self.error {
            ErrorPayload::Structured(cause) => cause.error_type.clone(),
            ErrorPayload::Message(_) => None,
        }
    }

    /// Human-readable reason, falling back to a generic message.
    pub fn reason(&self) -> String {
        match &self.error {
            ErrorPayload::Structured(cause) => cause
                .reason
                .clone()
                .unwrap_or_else(|| "unknown error".to_string()),
            ErrorPayload::Message(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_parses() {
        let body = serde_json::json!({
            "error": {
                "type": "resource_not_found_exception",
                "reason": "the task with id does not exist",
                "root_cause": [
                    {"type": "resource_not_found_exception", "reason": "the task with id does not exist"}
                ]
            },
            "status": 404
        });
        let parsed: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            parsed.error_type().as_deref(),
            Some("resource_not_found_exception")
        );
        assert_eq!(parsed.reason(), "the task with id does not exist");
        assert_eq!(parsed.status, Some(404));
    }

    #[test]
    fn test_string_error_parses() {
        let body = serde_json::json!({"error": "no handler found for uri"});
        let parsed: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.error_type(), None);
        assert_eq!(parsed.reason(), "no handler found for uri");
    }
}
