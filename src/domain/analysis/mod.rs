//! Analysis Module - Pure domain logic for the Bedrock analysis functions.
//!
//! Everything here is free of I/O: event normalization, prompt templates,
//! reply parsing and placeholder synthesis. The inference call itself lives
//! behind the `InferenceClient` port.
//!
//! # Components
//!
//! - `AnalysisKind` - Document, risk and compliance variants
//! - `AnalysisInput` - Payload and classification probed from either event shape
//! - `build_prompt` - Variant prompt templates
//! - `ParsedModelOutput` - Double decode of the reply with placeholder fallback

mod analysis_input;
mod analysis_kind;
mod errors;
mod model_output;
mod prompt;

pub use analysis_input::AnalysisInput;
pub use analysis_kind::{AnalysisKind, UnknownAnalysisKind};
pub use errors::{ModelOutputError, ValidationError};
pub use model_output::ParsedModelOutput;
pub use prompt::{build_prompt, framework_requirements};
