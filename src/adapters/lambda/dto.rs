//! Lambda proxy DTOs.
//!
//! The function answers in the API Gateway proxy shape: a status code,
//! fixed headers and a body that is itself a JSON-encoded string.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Proxy-style function result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: ProxyHeaders,
    pub body: String,
}

impl ProxyResponse {
    /// Encodes `body` and attaches the standard headers.
    pub fn json(status: StatusCode, body: &Value) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: ProxyHeaders::default(),
            body: body.to_string(),
        }
    }

    /// 200 with the analysis result.
    pub fn ok(body: &Value) -> Self {
        Self::json(StatusCode::OK, body)
    }

    /// 400 naming the missing input.
    pub fn bad_request(error: ErrorResponse) -> Self {
        Self::json(StatusCode::BAD_REQUEST, &error.to_value())
    }

    /// 500 carrying the fault message.
    pub fn internal(error: ErrorResponse) -> Self {
        Self::json(StatusCode::INTERNAL_SERVER_ERROR, &error.to_value())
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Decodes the body string back into JSON.
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

/// Headers sent on every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: String,
}

impl Default for ProxyHeaders {
    fn default() -> Self {
        Self {
            content_type: "application/json".to_string(),
            allow_origin: "*".to_string(),
        }
    }
}

/// Error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: "Internal server error".to_string(),
            message: Some(message.into()),
        }
    }

    fn to_value(&self) -> Value {
        serde_json::json!(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn proxy_response_serializes_proxy_shape() {
        let response = ProxyResponse::ok(&json!({ "a": 1 }));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "headers": {
                    "Content-Type": "application/json",
                    "Access-Control-Allow-Origin": "*"
                },
                "body": "{\"a\":1}"
            })
        );
    }

    #[test]
    fn bad_request_envelope_has_no_message() {
        let response = ProxyResponse::bad_request(ErrorResponse::bad_request(
            "document parameter is required",
        ));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body, r#"{"error":"document parameter is required"}"#);
    }

    #[test]
    fn internal_envelope_carries_message() {
        let response = ProxyResponse::internal(ErrorResponse::internal("connection reset"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body_json().unwrap(),
            json!({ "error": "Internal server error", "message": "connection reset" })
        );
    }

    #[test]
    fn every_status_gets_cors_headers() {
        let responses = [
            ProxyResponse::ok(&json!({})),
            ProxyResponse::bad_request(ErrorResponse::bad_request("x")),
            ProxyResponse::internal(ErrorResponse::internal("y")),
        ];
        for response in responses {
            assert_eq!(response.headers.content_type, "application/json");
            assert_eq!(response.headers.allow_origin, "*");
        }
    }
}
