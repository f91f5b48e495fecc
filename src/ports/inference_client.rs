//! Inference Client Port - Interface for the generative-text model endpoint.
//!
//! This port abstracts the single model call made per analysis request,
//! enabling the handler to be exercised without reaching Bedrock.
//!
//! # Design
//!
//! - One attempt per request: implementations must not retry
//! - The reply is returned as raw bytes; envelope decoding belongs to the domain
//! - Error types for the failure modes the endpoint reports
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoClient;
//!
//! #[async_trait]
//! impl InferenceClient for EchoClient {
//!     async fn invoke(&self, request: ModelInvocationRequest) -> Result<Vec<u8>, InferenceError> {
//!         Ok(format!(r#"{{"content":[{{"text":"{}"}}]}}"#, request.model_id).into_bytes())
//!     }
//!
//!     fn client_info(&self) -> ClientInfo {
//!         ClientInfo::new("echo", "none")
//!     }
//! }
//! ```

use async_trait::async_trait;

/// Output cap sent with every request.
pub const MAX_OUTPUT_TOKENS: u32 = 4000;

/// Sampling temperature sent with every request.
pub const SAMPLING_TEMPERATURE: f32 = 0.1;

/// Port for the generative-text inference endpoint.
///
/// Implementations translate a [`ModelInvocationRequest`] into the
/// provider's wire format and hand back the undecoded reply body.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Invokes the model once and returns the raw reply body.
    async fn invoke(&self, request: ModelInvocationRequest) -> Result<Vec<u8>, InferenceError>;

    /// Get client information (provider, region).
    fn client_info(&self) -> ClientInfo;
}

/// A single model invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInvocationRequest {
    /// Model identifier (e.g., "eu.anthropic.claude-3-7-sonnet-20250219-v1:0").
    pub model_id: String,
    /// Prompt sent as the only user message.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Temperature for response randomness.
    pub temperature: f32,
}

impl ModelInvocationRequest {
    /// Creates a request with the fixed generation parameters.
    pub fn new(model_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            prompt: prompt.into(),
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: SAMPLING_TEMPERATURE,
        }
    }
}

/// Client information for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    /// Provider name (e.g., "bedrock", "mock").
    pub provider: String,
    /// Region the client is bound to.
    pub region: String,
}

impl ClientInfo {
    /// Creates new client info.
    pub fn new(provider: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            region: region.into(),
        }
    }
}

/// Inference endpoint errors.
///
/// The variant names the failure; the display text is the endpoint's
/// message unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    /// Request was throttled by the endpoint.
    #[error("{0}")]
    Throttled(String),

    /// Caller is not allowed to invoke the model.
    #[error("{0}")]
    AccessDenied(String),

    /// Endpoint rejected the request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Model did not answer in time.
    #[error("{0}")]
    ModelTimeout(String),

    /// Model is still being provisioned.
    #[error("{0}")]
    ModelNotReady(String),

    /// Endpoint is unavailable.
    #[error("{0}")]
    Unavailable(String),

    /// Network error before a reply was received.
    #[error("{0}")]
    Network(String),

    /// Any other endpoint error.
    #[error("{0}")]
    Service(String),
}

impl InferenceError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a generic service error.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_fixed_generation_parameters() {
        let request = ModelInvocationRequest::new("model-a", "Hello");

        assert_eq!(request.model_id, "model-a");
        assert_eq!(request.prompt, "Hello");
        assert_eq!(request.max_tokens, 4000);
        assert_eq!(request.temperature, 0.1);
    }

    #[test]
    fn client_info_constructor_works() {
        let info = ClientInfo::new("bedrock", "eu-central-1");
        assert_eq!(info.provider, "bedrock");
        assert_eq!(info.region, "eu-central-1");
    }

    #[test]
    fn inference_error_displays_endpoint_message_unchanged() {
        assert_eq!(
            InferenceError::network("connection reset").to_string(),
            "connection reset"
        );
        assert_eq!(
            InferenceError::Throttled("slow down".to_string()).to_string(),
            "slow down"
        );
        assert_eq!(InferenceError::service("boom").to_string(), "boom");
    }

    #[test]
    fn inference_error_debug_names_the_failure() {
        let debug = format!("{:?}", InferenceError::ModelTimeout("late".to_string()));
        assert_eq!(debug, "ModelTimeout(\"late\")");
    }
}
