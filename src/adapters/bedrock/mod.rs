//! Amazon Bedrock adapter.
//!
//! - `BedrockInferenceClient` - `InferenceClient` over the Bedrock runtime `InvokeModel` API

mod bedrock_client;

pub use bedrock_client::BedrockInferenceClient;
