//! Bedrock Client - Implementation of InferenceClient for Amazon Bedrock.
//!
//! Sends the prompt to an Anthropic model through the `InvokeModel` API using
//! the Messages request format, and hands the reply body back undecoded.
//!
//! # Configuration
//!
//! ```ignore
//! let config = BedrockConfig::default();
//! let client = BedrockInferenceClient::from_config(&config).await;
//! ```
//!
//! Credentials come from the SDK's default provider chain (the function's
//! execution role when deployed).

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::BedrockConfig;
use crate::ports::{ClientInfo, InferenceClient, InferenceError, ModelInvocationRequest};

/// Anthropic-on-Bedrock API version sent in every request body.
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Content type used for both the request body and the accepted reply.
const JSON_CONTENT_TYPE: &str = "application/json";

/// Bedrock runtime client implementation.
#[derive(Debug, Clone)]
pub struct BedrockInferenceClient {
    client: Client,
    region: String,
}

impl BedrockInferenceClient {
    /// Wraps an already-built SDK client.
    pub fn new(client: Client, region: impl Into<String>) -> Self {
        Self {
            client,
            region: region.into(),
        }
    }

    /// Loads the shared AWS configuration and builds the SDK client.
    ///
    /// Region resolution: the configured region, then the SDK's default
    /// chain (`AWS_REGION`, profile, IMDS), then `eu-central-1`.
    pub async fn from_config(config: &BedrockConfig) -> Self {
        let region_provider = RegionProviderChain::first_try(config.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(Region::new(BedrockConfig::FALLBACK_REGION));

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        let region = shared
            .region()
            .map(|r| r.as_ref().to_string())
            .unwrap_or_else(|| BedrockConfig::FALLBACK_REGION.to_string());

        Self::new(Client::new(&shared), region)
    }
}

#[async_trait]
impl InferenceClient for BedrockInferenceClient {
    async fn invoke(&self, request: ModelInvocationRequest) -> Result<Vec<u8>, InferenceError> {
        let body = serde_json::to_vec(&MessagesRequest::from(&request))
            .map_err(|e| InferenceError::InvalidRequest(e.to_string()))?;

        debug!(
            model_id = %request.model_id,
            prompt_bytes = request.prompt.len(),
            "Invoking Bedrock model"
        );

        let response = self
            .client
            .invoke_model()
            .model_id(&request.model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                error!("Bedrock invoke_model failed: {}", DisplayErrorContext(&e));
                map_sdk_error(e)
            })?;

        Ok(response.body().as_ref().to_vec())
    }

    fn client_info(&self) -> ClientInfo {
        ClientInfo::new("bedrock", &self.region)
    }
}

/// Maps an SDK failure onto the port's error taxonomy.
///
/// The variant records what failed; the message is the endpoint's or the
/// transport's own text, undecorated.
fn map_sdk_error(err: SdkError<InvokeModelError>) -> InferenceError {
    match err {
        SdkError::ServiceError(context) => map_service_error(context.into_err()),
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            InferenceError::network(root_cause_message(&err))
        }
        _ => InferenceError::service(root_cause_message(&err)),
    }
}

fn map_service_error(err: InvokeModelError) -> InferenceError {
    let message = service_message(&err);

    if err.is_throttling_exception() || err.is_service_quota_exceeded_exception() {
        InferenceError::Throttled(message)
    } else if err.is_access_denied_exception() {
        InferenceError::AccessDenied(message)
    } else if err.is_validation_exception() || err.is_resource_not_found_exception() {
        InferenceError::InvalidRequest(message)
    } else if err.is_model_timeout_exception() {
        InferenceError::ModelTimeout(message)
    } else if err.is_model_not_ready_exception() {
        InferenceError::ModelNotReady(message)
    } else if err.is_service_unavailable_exception() || err.is_internal_server_exception() {
        InferenceError::Unavailable(message)
    } else {
        InferenceError::Service(message)
    }
}

/// The exception's own message, then the response metadata's, then the
/// error's display text.
fn service_message(err: &InvokeModelError) -> String {
    let exception_message = match err {
        InvokeModelError::AccessDeniedException(e) => e.message(),
        InvokeModelError::InternalServerException(e) => e.message(),
        InvokeModelError::ModelErrorException(e) => e.message(),
        InvokeModelError::ModelNotReadyException(e) => e.message(),
        InvokeModelError::ModelTimeoutException(e) => e.message(),
        InvokeModelError::ResourceNotFoundException(e) => e.message(),
        InvokeModelError::ServiceQuotaExceededException(e) => e.message(),
        InvokeModelError::ServiceUnavailableException(e) => e.message(),
        InvokeModelError::ThrottlingException(e) => e.message(),
        InvokeModelError::ValidationException(e) => e.message(),
        _ => None,
    };

    exception_message
        .or_else(|| ProvideErrorMetadata::message(err))
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string())
}

/// Display text of the innermost error in the source chain.
fn root_cause_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

// ----- Anthropic Messages API Types -----

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    temperature: f32,
    messages: [UserMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ModelInvocationRequest> for MessagesRequest<'a> {
    fn from(request: &'a ModelInvocationRequest) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            messages: [UserMessage {
                role: "user",
                content: &request.prompt,
            }],
        }
    }
}
