use serde::Deserialize;

/// Error body shared by the chat APIs: `{"error": {"type": ..., "message": ...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorEnvelope {
    pub error: ApiError,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiError {
    #[serde(rename = "type", alias = "status", default)]
    pub error_type: Option<String>,
    pub message: String,
}

impl ApiError {
    /// Best-effort readable message from an error response body.
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error.error_type {
                Some(error_type) => format!("{}: {}", error_type, envelope.error.message),
                None => envelope.error.message,
            },
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_structured_error_bodies() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        assert_eq!(ApiError::describe(body), "overloaded_error: Overloaded");
    }

    #[test]
    fn falls_back_to_raw_text() {
        assert_eq!(ApiError::describe("  bad gateway "), "bad gateway");
        assert_eq!(ApiError::describe(""), "Unknown error");
    }
}
