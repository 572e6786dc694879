//! Response envelope shared by every endpoint

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Outcome marker carried in every response body.
///
/// `Fail` is a client error (4xx), `Error` a server error (5xx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

/// Successful response body: `{"status": "success", "message"?, "data"?}`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Success carrying a payload
    pub fn data(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    /// Attach a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Envelope<()> {
    /// Success carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_only_envelope_omits_data() {
        let body = serde_json::to_value(Envelope::message("Book deleted")).unwrap();
        assert_eq!(body, json!({"status": "success", "message": "Book deleted"}));
    }

    #[test]
    fn data_envelope_with_message() {
        let body =
            serde_json::to_value(Envelope::data(json!({"bookId": "x"})).with_message("added"))
                .unwrap();
        assert_eq!(
            body,
            json!({"status": "success", "message": "added", "data": {"bookId": "x"}})
        );
    }
}
