//! AnalysisRequestHandler - Runs one analysis request against the model.
//!
//! Pipeline for a validated input:
//! 1. Build the variant prompt
//! 2. Invoke the model once (no retry)
//! 3. Decode the reply envelope and the answer text
//! 4. Pass a JSON answer through, or synthesize the variant placeholder

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::{
    build_prompt, AnalysisInput, ModelOutputError, ParsedModelOutput,
};
use crate::ports::{InferenceClient, InferenceError, ModelInvocationRequest};

/// Errors that turn a request into a fault.
///
/// Missing input is rejected before this handler runs, and an answer that
/// is not JSON is absorbed by the fallback, so neither appears here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    MalformedModelResponse(#[from] ModelOutputError),
}

/// Result of a completed analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Response body: the model's JSON verbatim, or the variant placeholder.
    pub response: Value,
    /// True if the placeholder was synthesized.
    pub fallback: bool,
}

/// Handler for analysis requests.
pub struct AnalysisRequestHandler {
    client: Arc<dyn InferenceClient>,
    model_id: String,
}

impl AnalysisRequestHandler {
    pub fn new(client: Arc<dyn InferenceClient>, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    pub async fn handle(&self, input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
        let kind = input.kind();

        // 1. Build prompt
        let prompt = build_prompt(input);
        let request = ModelInvocationRequest::new(&self.model_id, prompt);

        // 2. Single model call
        let reply = self.client.invoke(request).await?;

        // 3. Envelope decode, then second decode of the answer text
        let parsed = ParsedModelOutput::from_reply(&reply)?;
        let fallback = parsed.is_fallback();
        if fallback {
            debug!(
                kind = kind.as_str(),
                "Model answer was not JSON, synthesizing placeholder response"
            );
        }

        // 4. Map to response body
        let response = parsed.into_response(kind);

        info!(
            kind = kind.as_str(),
            classification = input.classification(),
            fallback,
            "Analysis completed"
        );

        Ok(AnalysisResult { response, fallback })
    }
}
