//! AWS Lambda adapter.
//!
//! - `AnalysisFunction` - Event handling and status mapping for one analysis kind
//! - `dto` - Proxy response and error envelope shapes

pub mod dto;

mod analysis_function;

pub use analysis_function::AnalysisFunction;
pub use dto::{ErrorResponse, ProxyHeaders, ProxyResponse};
