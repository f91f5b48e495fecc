//! Analysis Lambda - Bedrock-backed audit analysis functions
//!
//! This crate implements the document analysis, risk assessment and
//! compliance monitoring Lambda functions. Each invocation builds a prompt,
//! calls a Bedrock-hosted model once and returns the model's JSON answer,
//! or a placeholder of the same shape when the answer is not JSON.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
