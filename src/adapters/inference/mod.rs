//! Inference Client Adapters that don't reach the network.
//!
//! - `MockInferenceClient` - Configurable mock for testing

mod mock_client;

pub use mock_client::{MockInferenceClient, MockReply};
