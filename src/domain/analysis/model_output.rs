//! Model output parsing.
//!
//! The model is asked to answer with JSON, but it returns that JSON as the
//! text of a content block. The reply is therefore decoded twice: once as the
//! content-block envelope and once more on the text of the first block.
//!
//! The second decode never fails the request. Text that is not JSON becomes
//! [`ParsedModelOutput::Unstructured`] and is folded into the kind's
//! placeholder response.

use serde::Deserialize;
use serde_json::Value;

use super::{AnalysisKind, ModelOutputError};

/// Envelope returned by the inference endpoint.
#[derive(Debug, Deserialize)]
struct ModelEnvelope {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

/// The model's answer after the second decode.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedModelOutput {
    /// The answer text was valid JSON.
    Structured(Value),
    /// The answer text was prose or malformed JSON.
    Unstructured(String),
}

impl ParsedModelOutput {
    /// Decodes a raw reply body and classifies the first block's text.
    ///
    /// # Errors
    ///
    /// Returns `ModelOutputError` when the body is not a content-block
    /// envelope, has no blocks, or the first block carries no text.
    pub fn from_reply(body: &[u8]) -> Result<Self, ModelOutputError> {
        let envelope: ModelEnvelope = serde_json::from_slice(body)
            .map_err(|e| ModelOutputError::InvalidEnvelope(e.to_string()))?;

        let text = envelope
            .content
            .into_iter()
            .next()
            .ok_or(ModelOutputError::NoContent)?
            .text
            .ok_or(ModelOutputError::MissingText)?;

        Ok(Self::from_text(text))
    }

    /// Classifies answer text as structured or unstructured.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ParsedModelOutput::Structured(value),
            Err(_) => ParsedModelOutput::Unstructured(text),
        }
    }

    /// Returns true if the answer had to be replaced by a placeholder.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedModelOutput::Unstructured(_))
    }

    /// Maps either variant to the response body for `kind`.
    ///
    /// Structured answers pass through unvalidated.
    pub fn into_response(self, kind: AnalysisKind) -> Value {
        match self {
            ParsedModelOutput::Structured(value) => value,
            ParsedModelOutput::Unstructured(text) => kind.fallback_response(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_text_passes_through() {
        let body = br#"{"content":[{"text":"{\"analysis_summary\":\"ok\",\"key_findings\":[],\"recommended_actions\":[],\"document_classification\":\"Low\"}"}]}"#;
        let parsed = ParsedModelOutput::from_reply(body).unwrap();

        assert!(!parsed.is_fallback());
        assert_eq!(
            parsed.into_response(AnalysisKind::Document),
            json!({
                "analysis_summary": "ok",
                "key_findings": [],
                "recommended_actions": [],
                "document_classification": "Low"
            })
        );
    }

    #[test]
    fn prose_becomes_fallback() {
        let body = br#"{"content":[{"text":"This document looks fine."}]}"#;
        let parsed = ParsedModelOutput::from_reply(body).unwrap();

        assert_eq!(
            parsed,
            ParsedModelOutput::Unstructured("This document looks fine.".to_string())
        );
        let response = parsed.into_response(AnalysisKind::Document);
        assert_eq!(response["analysis_summary"], "This document looks fine.");
        assert_eq!(response["document_classification"], "Standard");
    }

    #[test]
    fn json_lookalike_becomes_fallback() {
        let text = "{\"risk_level\": High, 'quoted' }";
        let parsed = ParsedModelOutput::from_text(text.to_string());

        assert!(parsed.is_fallback());
        assert_eq!(parsed.into_response(AnalysisKind::Risk)["risk_assessment"], text);
    }

    #[test]
    fn non_object_json_is_structured() {
        let parsed = ParsedModelOutput::from_text("[1, 2]".to_string());
        assert_eq!(parsed, ParsedModelOutput::Structured(json!([1, 2])));
    }

    #[test]
    fn only_first_block_is_read() {
        let body = br#"{"content":[{"text":"first"},{"text":"{}"}]}"#;
        let parsed = ParsedModelOutput::from_reply(body).unwrap();

        assert_eq!(parsed, ParsedModelOutput::Unstructured("first".to_string()));
    }

    #[test]
    fn extra_envelope_fields_are_ignored() {
        let body = br#"{"id":"msg_1","type":"message","content":[{"type":"text","text":"{}"}],"usage":{"input_tokens":3}}"#;
        let parsed = ParsedModelOutput::from_reply(body).unwrap();

        assert_eq!(parsed, ParsedModelOutput::Structured(json!({})));
    }

    #[test]
    fn invalid_envelope_is_an_error() {
        let err = ParsedModelOutput::from_reply(b"not json").unwrap_err();
        assert!(matches!(err, ModelOutputError::InvalidEnvelope(_)));
    }

    #[test]
    fn empty_content_is_an_error() {
        let err = ParsedModelOutput::from_reply(br#"{"content":[]}"#).unwrap_err();
        assert_eq!(err, ModelOutputError::NoContent);

        let err = ParsedModelOutput::from_reply(br#"{}"#).unwrap_err();
        assert_eq!(err, ModelOutputError::NoContent);
    }

    #[test]
    fn block_without_text_is_an_error() {
        let err = ParsedModelOutput::from_reply(br#"{"content":[{"type":"image"}]}"#).unwrap_err();
        assert_eq!(err, ModelOutputError::MissingText);
    }
}
