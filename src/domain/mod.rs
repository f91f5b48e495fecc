//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `analysis` - Variants, event normalization, prompts and reply parsing
//!   for the analysis functions

pub mod analysis;
