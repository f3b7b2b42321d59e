//! Inbound request schema.
//!
//! Both chat endpoints accept the same JSON body:
//!
//! | field          | required | type   | default     |
//! |----------------|----------|--------|-------------|
//! | `message`      | yes*     | string |             |
//! | `text`         | legacy   | string |             |
//! | `voiceEmotion` | no       | string | absent      |
//! | `currentMood`  | no       | string | `"neutral"` |
//!
//! *`text` is read only when `message` is absent or null.

use serde_json::{Map, Value};

use crate::error::ChatError;

/// Default for `currentMood`.
pub const DEFAULT_MOOD: &str = "neutral";

/// A validated chat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// The message exactly as sent, untrimmed. Never blank.
    pub message: String,
    pub voice_emotion: Option<String>,
    /// Accepted for compatibility; not used to compute the reply.
    pub current_mood: String,
}

impl ChatRequest {
    /// Validate a decoded JSON body.
    pub fn from_value(body: &Value) -> Result<Self, ChatError> {
        if is_falsy(body) {
            return Err(ChatError::MissingBody);
        }
        let fields = body.as_object().ok_or_else(|| {
            ChatError::Internal(format!(
                "Expected a JSON object, got {}",
                type_name(body)
            ))
        })?;

        let message = match optional_string(fields, "message")? {
            Some(message) => message,
            None => optional_string(fields, "text")?.unwrap_or_default(),
        };
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let voice_emotion = optional_string(fields, "voiceEmotion")?;
        let current_mood =
            optional_string(fields, "currentMood")?.unwrap_or_else(|| DEFAULT_MOOD.to_string());

        Ok(Self {
            message,
            voice_emotion,
            current_mood,
        })
    }
}

/// Absent and `null` both read as `None`; any non-string value is an error.
fn optional_string(fields: &Map<String, Value>, key: &str) -> Result<Option<String>, ChatError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ChatError::Internal(format!(
            "Field '{}' must be a string, got {}",
            key,
            type_name(other)
        ))),
    }
}

/// Empty JSON documents count as no body at all.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_request() {
        let request = ChatRequest::from_value(&json!({
            "message": "  hello  ",
            "voiceEmotion": "calm",
            "currentMood": "tired",
        }))
        .unwrap();
        assert_eq!(request.message, "  hello  ");
        assert_eq!(request.voice_emotion.as_deref(), Some("calm"));
        assert_eq!(request.current_mood, "tired");
    }

    #[test]
    fn test_defaults() {
        let request = ChatRequest::from_value(&json!({"message": "hi"})).unwrap();
        assert!(request.voice_emotion.is_none());
        assert_eq!(request.current_mood, DEFAULT_MOOD);
    }

    #[test]
    fn test_legacy_text_field() {
        let request = ChatRequest::from_value(&json!({"text": "hi"})).unwrap();
        assert_eq!(request.message, "hi");

        let request =
            ChatRequest::from_value(&json!({"message": null, "text": "fallback"})).unwrap();
        assert_eq!(request.message, "fallback");
    }

    #[test]
    fn test_message_preferred_over_text() {
        let request =
            ChatRequest::from_value(&json!({"message": "primary", "text": "legacy"})).unwrap();
        assert_eq!(request.message, "primary");
    }

    #[test]
    fn test_empty_documents_are_missing_body() {
        for body in [json!(null), json!({}), json!([]), json!(""), json!(0), json!(false)] {
            assert_eq!(
                ChatRequest::from_value(&body).unwrap_err(),
                ChatError::MissingBody,
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_blank_message() {
        for body in [
            json!({"message": ""}),
            json!({"message": "   \n\t"}),
            json!({"voiceEmotion": "sad"}),
        ] {
            assert_eq!(
                ChatRequest::from_value(&body).unwrap_err(),
                ChatError::EmptyMessage
            );
        }
    }

    #[test]
    fn test_wrong_types_are_internal() {
        assert!(matches!(
            ChatRequest::from_value(&json!({"message": "hi", "voiceEmotion": 3})),
            Err(ChatError::Internal(_))
        ));
        assert!(matches!(
            ChatRequest::from_value(&json!({"message": 42})),
            Err(ChatError::Internal(_))
        ));
        assert!(matches!(
            ChatRequest::from_value(&json!(["hi"])),
            Err(ChatError::Internal(_))
        ));
    }
}
