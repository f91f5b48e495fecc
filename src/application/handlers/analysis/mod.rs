//! Analysis handlers.
//!
//! - `AnalysisRequestHandler` - Prompt, single model call, reply parsing

mod analysis_request_handler;

pub use analysis_request_handler::{AnalysisError, AnalysisRequestHandler, AnalysisResult};
