//! AnalysisInput - normalized view of an invocation event.
//!
//! Events reach the function in two shapes: direct invocations carry the
//! fields at the top level, API Gateway proxy invocations carry them under
//! `body` (as an object, or as a JSON-encoded string). Both are probed here,
//! top level first, so nothing downstream sees the transport wrapper.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::{AnalysisKind, ValidationError};

/// Event field that wraps the payload in proxy invocations.
const BODY_FIELD: &str = "body";

/// Canonical input for one analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    kind: AnalysisKind,
    payload: String,
    classification: String,
}

impl AnalysisInput {
    /// Creates an input from already-extracted values.
    pub fn new(
        kind: AnalysisKind,
        payload: impl Into<String>,
        classification: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            payload: payload.into(),
            classification: classification.into(),
        }
    }

    /// Extracts the payload and classification for `kind` from a raw event.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingParameter` when the payload field is
    /// absent, `null` or empty at both locations.
    pub fn from_event(kind: AnalysisKind, event: &Value) -> Result<Self, ValidationError> {
        let nested = nested_body(event);
        let nested = nested.as_deref();

        let payload = probe(event, nested, kind.payload_field())
            .ok_or_else(|| ValidationError::missing_parameter(kind.payload_field()))?;

        let classification = probe(event, nested, kind.classification_field())
            .unwrap_or_else(|| kind.default_classification().to_string());

        Ok(Self {
            kind,
            payload,
            classification,
        })
    }

    pub fn kind(&self) -> AnalysisKind {
        self.kind
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn classification(&self) -> &str {
        &self.classification
    }
}

/// Returns the nested body object, decoding it if it arrived as a string.
fn nested_body(event: &Value) -> Option<Cow<'_, Map<String, Value>>> {
    match event.get(BODY_FIELD)? {
        Value::Object(map) => Some(Cow::Borrowed(map)),
        Value::String(raw) => serde_json::from_str::<Map<String, Value>>(raw)
            .ok()
            .map(Cow::Owned),
        _ => None,
    }
}

/// Looks up `field` at the top level, then in the nested body.
fn probe(event: &Value, nested: Option<&Map<String, Value>>, field: &str) -> Option<String> {
    event
        .get(field)
        .and_then(field_text)
        .or_else(|| nested.and_then(|body| body.get(field)).and_then(field_text))
}

/// Renders a field value as prompt text; `null` and `""` count as absent.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
