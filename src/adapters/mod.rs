//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `bedrock` - Amazon Bedrock inference client
//! - `inference` - In-process inference clients (mock)
//! - `lambda` - AWS Lambda entry point and proxy response shapes

pub mod bedrock;
pub mod inference;
pub mod lambda;

pub use bedrock::BedrockInferenceClient;
pub use inference::MockInferenceClient;
pub use lambda::{AnalysisFunction, ProxyResponse};
