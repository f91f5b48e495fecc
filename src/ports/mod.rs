//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `InferenceClient` - Port for the generative-text model endpoint

mod inference_client;

pub use inference_client::{
    ClientInfo, InferenceClient, InferenceError, ModelInvocationRequest, MAX_OUTPUT_TOKENS,
    SAMPLING_TEMPERATURE,
};
