//! AnalysisFunction - Lambda entry point for the analysis handlers.
//!
//! Owns everything transport-shaped: logging the raw event, probing both
//! event shapes, and turning results and errors into proxy responses. Every
//! invocation yields exactly one `ProxyResponse`; nothing is surfaced to the
//! runtime as an invocation error.

use std::sync::Arc;

use lambda_runtime::LambdaEvent;
use serde_json::Value;
use tracing::{error, info, info_span, warn, Instrument};

use super::dto::{ErrorResponse, ProxyResponse};
use crate::application::handlers::analysis::{AnalysisError, AnalysisRequestHandler};
use crate::domain::analysis::{AnalysisInput, AnalysisKind, ValidationError};

/// Lambda-facing wrapper around [`AnalysisRequestHandler`] for one kind.
#[derive(Clone)]
pub struct AnalysisFunction {
    kind: AnalysisKind,
    handler: Arc<AnalysisRequestHandler>,
}

impl AnalysisFunction {
    pub fn new(kind: AnalysisKind, handler: Arc<AnalysisRequestHandler>) -> Self {
        Self { kind, handler }
    }

    /// Runtime adapter for `lambda_runtime::service_fn`.
    pub async fn call(&self, event: LambdaEvent<Value>) -> Result<ProxyResponse, lambda_runtime::Error> {
        let (payload, context) = event.into_parts();
        let span = info_span!("invocation", request_id = %context.request_id);

        Ok(self.handle_event(&payload).instrument(span).await)
    }

    /// Handles one raw event.
    pub async fn handle_event(&self, event: &Value) -> ProxyResponse {
        info!(
            kind = self.kind.as_str(),
            event = %event,
            "{} Lambda triggered",
            self.kind
        );

        let input = match AnalysisInput::from_event(self.kind, event) {
            Ok(input) => input,
            Err(e) => return handle_validation_error(e),
        };

        match self.handler.handle(&input).await {
            Ok(result) => ProxyResponse::ok(&result.response),
            Err(e) => {
                error!(kind = self.kind.as_str(), error = ?e, "Error in {}", self.kind);
                handle_analysis_error(e)
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_validation_error(error: ValidationError) -> ProxyResponse {
    warn!(field = error.field(), "Rejecting event: {}", error);
    ProxyResponse::bad_request(ErrorResponse::bad_request(error.to_string()))
}

fn handle_analysis_error(error: AnalysisError) -> ProxyResponse {
    ProxyResponse::internal(ErrorResponse::internal(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::inference::MockInferenceClient;
    use crate::domain::analysis::ModelOutputError;
    use crate::ports::InferenceError;
    use http::StatusCode;
    use serde_json::json;

    fn function_with(kind: AnalysisKind, client: &MockInferenceClient) -> AnalysisFunction {
        let handler = AnalysisRequestHandler::new(Arc::new(client.clone()), "test-model");
        AnalysisFunction::new(kind, Arc::new(handler))
    }

    #[test]
    fn validation_error_maps_to_400() {
        let response = handle_validation_error(ValidationError::missing_parameter("risk_data"));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body_json().unwrap(),
            json!({ "error": "risk_data parameter is required" })
        );
    }

    #[test]
    fn analysis_error_maps_to_500() {
        let response = handle_analysis_error(AnalysisError::MalformedModelResponse(
            ModelOutputError::MissingText,
        ));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body_json().unwrap()["message"],
            "first content block has no text"
        );
    }

    #[tokio::test]
    async fn missing_payload_skips_model_call() {
        let client = MockInferenceClient::new();
        let function = function_with(AnalysisKind::Compliance, &client);

        let response = function.handle_event(&json!({ "regulation_type": "SOX" })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn inference_fault_maps_to_500_with_message() {
        let error = InferenceError::AccessDenied("not authorized to invoke model".to_string());
        let client = MockInferenceClient::new().with_error(error.clone());
        let function = function_with(AnalysisKind::Risk, &client);

        let response = function.handle_event(&json!({ "risk_data": "x" })).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.body_json().unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], error.to_string());
    }

    #[tokio::test]
    async fn success_returns_model_json() {
        let client = MockInferenceClient::new().with_answer(r#"{"compliance_status":"Compliant"}"#);
        let function = function_with(AnalysisKind::Compliance, &client);

        let response = function
            .handle_event(&json!({ "body": { "compliance_data": "audit trail" } }))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body, r#"{"compliance_status":"Compliant"}"#);
    }
}
