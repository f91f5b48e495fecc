//! AnalysisKind enum representing the three analysis functions.
//!
//! Each kind shares the same request pipeline and differs only in the event
//! field names it reads, the default classification, the prompt it sends and
//! the placeholder object it falls back to.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// The three analysis functions deployed from this crate.
///
/// Deserialization goes through [`FromStr`], so it is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AnalysisKind {
    /// Audit document analysis.
    #[default]
    Document,
    /// Risk assessment.
    Risk,
    /// Regulatory compliance monitoring.
    Compliance,
}

impl AnalysisKind {
    /// Returns all kinds in canonical order.
    pub fn all() -> &'static [AnalysisKind] {
        &[
            AnalysisKind::Document,
            AnalysisKind::Risk,
            AnalysisKind::Compliance,
        ]
    }

    /// Event field holding the text to analyze.
    pub fn payload_field(&self) -> &'static str {
        match self {
            AnalysisKind::Document => "document",
            AnalysisKind::Risk => "risk_data",
            AnalysisKind::Compliance => "compliance_data",
        }
    }

    /// Event field holding the optional classification.
    pub fn classification_field(&self) -> &'static str {
        match self {
            AnalysisKind::Document => "analysis_type",
            AnalysisKind::Risk => "risk_category",
            AnalysisKind::Compliance => "regulation_type",
        }
    }

    /// Classification used when the event carries none.
    pub fn default_classification(&self) -> &'static str {
        match self {
            AnalysisKind::Document => "general",
            AnalysisKind::Risk => "operational",
            AnalysisKind::Compliance => "general",
        }
    }

    /// Field names the model is asked to return, in response order.
    ///
    /// The first field is the narrative field that receives the raw model
    /// text when the answer cannot be parsed as JSON.
    pub fn response_fields(&self) -> &'static [&'static str] {
        match self {
            AnalysisKind::Document => &[
                "analysis_summary",
                "key_findings",
                "recommended_actions",
                "document_classification",
            ],
            AnalysisKind::Risk => &[
                "risk_assessment",
                "risk_level",
                "risk_factors",
                "mitigation_recommendations",
                "impact_analysis",
            ],
            AnalysisKind::Compliance => &[
                "compliance_assessment",
                "compliance_status",
                "non_compliance_issues",
            ],
        }
    }

    /// Field receiving the raw model text in a fallback response.
    pub fn summary_field(&self) -> &'static str {
        self.response_fields()[0]
    }

    /// Builds the placeholder response for an answer that was not JSON.
    pub fn fallback_response(&self, raw_text: &str) -> Value {
        match self {
            AnalysisKind::Document => json!({
                "analysis_summary": raw_text,
                "key_findings": ["Document analysis completed"],
                "recommended_actions": ["Review analysis results"],
                "document_classification": "Standard",
            }),
            AnalysisKind::Risk => json!({
                "risk_assessment": raw_text,
                "risk_level": "Medium",
                "risk_factors": ["Analysis completed"],
                "mitigation_recommendations": ["Review risk assessment results"],
                "impact_analysis": "Impact analysis requires manual review",
            }),
            AnalysisKind::Compliance => json!({
                "compliance_assessment": raw_text,
                "compliance_status": "Partially Compliant",
                "non_compliance_issues": ["Analysis completed but requires manual review"],
            }),
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisKind::Document => "Document Analysis",
            AnalysisKind::Risk => "Risk Assessment",
            AnalysisKind::Compliance => "Compliance Monitoring",
        }
    }

    /// Returns the configuration identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Document => "document",
            AnalysisKind::Risk => "risk",
            AnalysisKind::Compliance => "compliance",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when parsing an unknown analysis kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown analysis kind: {0}")]
pub struct UnknownAnalysisKind(pub String);

impl FromStr for AnalysisKind {
    type Err = UnknownAnalysisKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "document" => Ok(AnalysisKind::Document),
            "risk" => Ok(AnalysisKind::Risk),
            "compliance" => Ok(AnalysisKind::Compliance),
            other => Err(UnknownAnalysisKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for AnalysisKind {
    type Error = UnknownAnalysisKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
