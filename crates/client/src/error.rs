use serde_json::Value;
use thiserror::Error;

/// Toast text when nothing better can be extracted
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again";

/// Product service call errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed with status code {status}")]
    Http { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// `message` (or `error`, `msg`) of an error body
pub fn extract_error_message(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    ["message", "error", "msg"]
        .iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Object(_) => extract_error_message(value),
            _ => None,
        })
}

impl ClientError {
    /// Build from a non-success response and its raw body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| extract_error_message(&value));
        ClientError::Http { status, message }
    }

    /// Message for the user: the service's own message, then the error
    /// text, then a generic fallback
    pub fn user_message(&self) -> String {
        if let ClientError::Http {
            message: Some(message),
            ..
        } = self
        {
            return message.clone();
        }
        let text = self.to_string();
        if text.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            text
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
