//! Mock Inference Client for testing.
//!
//! Provides a configurable mock implementation of the InferenceClient port,
//! allowing tests to run without calling Bedrock.
//!
//! # Features
//!
//! - Pre-configured replies (raw bodies or answer text wrapped in an envelope)
//! - Simulated delays
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let client = MockInferenceClient::new()
//!     .with_answer(r#"{"analysis_summary":"ok"}"#);
//!
//! let reply = client.invoke(request).await?;
//! assert_eq!(client.call_count(), 1);
//! ```

use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ClientInfo, InferenceClient, InferenceError, ModelInvocationRequest};

/// Mock inference client for testing.
///
/// Clones share the reply queue and the call history.
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Client info to return.
    info: ClientInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<ModelInvocationRequest>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this body verbatim.
    Body(Vec<u8>),
    /// Return an error.
    Error(InferenceError),
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockInferenceClient {
    /// Creates a new mock client with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            info: ClientInfo::new("mock", "local"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a raw reply body.
    pub fn with_body(self, body: impl Into<Vec<u8>>) -> Self {
        self.push(MockReply::Body(body.into()));
        self
    }

    /// Queues answer text wrapped in a single-block envelope.
    pub fn with_answer(self, text: impl Into<String>) -> Self {
        let body = json!({ "content": [{ "type": "text", "text": text.into() }] }).to_string();
        self.with_body(body)
    }

    /// Queues an error reply.
    pub fn with_error(self, error: InferenceError) -> Self {
        self.push(MockReply::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this client.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<ModelInvocationRequest> {
        self.lock_calls().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.lock_calls().clear();
    }

    fn push(&self, reply: MockReply) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<ModelInvocationRequest>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Gets the next reply or a default prose answer.
    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                MockReply::Body(br#"{"content":[{"type":"text","text":"Mock response"}]}"#.to_vec())
            })
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn invoke(&self, request: ModelInvocationRequest) -> Result<Vec<u8>, InferenceError> {
        self.lock_calls().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Body(body) => Ok(body),
            MockReply::Error(err) => Err(err),
        }
    }

    fn client_info(&self) -> ClientInfo {
        self.info.clone()
    }
}
