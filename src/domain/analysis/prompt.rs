//! Prompt construction for the analysis functions.
//!
//! The payload and classification are interpolated as-is. Nothing is escaped
//! or delimited, so a payload can contain text that reads as instructions.

use std::fmt::Write;

use super::{AnalysisInput, AnalysisKind};

/// Builds the prompt sent to the model for one request.
pub fn build_prompt(input: &AnalysisInput) -> String {
    let kind = input.kind();
    let classification = input.classification();
    let payload = input.payload();

    let mut prompt = match kind {
        AnalysisKind::Document => format!(
            "You are a document analysis AI assistant. Perform {classification} analysis on the following document:\n\
             \n\
             Document content: {payload}\n\
             \n\
             Please provide:\n\
             1. A detailed analysis summary\n\
             2. Key findings and insights\n\
             3. Recommended actions if any\n\
             4. Document classification and importance level\n"
        ),
        AnalysisKind::Risk => format!(
            "You are a risk assessment AI assistant. Analyze the following {classification} risk data:\n\
             \n\
             Risk data: {payload}\n\
             \n\
             Please provide:\n\
             1. A comprehensive risk assessment\n\
             2. Risk level (Low, Medium, High, Critical)\n\
             3. Specific risk factors identified\n\
             4. Mitigation recommendations\n\
             5. Impact analysis\n"
        ),
        AnalysisKind::Compliance => {
            let mut prompt = format!(
                "You are a compliance monitoring AI assistant. Analyze the following data for {classification} regulatory compliance:\n\
                 \n\
                 Data to analyze: {payload}\n\
                 \n"
            );
            if let Some(requirements) = framework_requirements(classification) {
                prompt.push_str("Framework requirements:\n");
                for requirement in requirements {
                    // Writing into a String cannot fail.
                    let _ = writeln!(prompt, "- {requirement}");
                }
                prompt.push('\n');
            }
            prompt.push_str(
                "Please provide:\n\
                 1. A detailed compliance assessment\n\
                 2. Overall compliance status (Compliant, Non-Compliant, or Partially Compliant)\n\
                 3. List any non-compliance issues found\n",
            );
            prompt
        }
    };

    let _ = write!(
        prompt,
        "\nRespond in JSON format with the fields: {}",
        kind.response_fields().join(", ")
    );
    prompt
}

/// Requirements of well-known regulatory frameworks, matched case-insensitively.
pub fn framework_requirements(regulation: &str) -> Option<&'static [&'static str]> {
    match regulation.trim().to_ascii_uppercase().as_str() {
        "GDPR" => Some(&[
            "Data protection by design and by default",
            "Consent management",
            "Data subject rights",
            "Data breach notification",
            "Privacy impact assessments",
        ]),
        "SOX" => Some(&[
            "Internal controls over financial reporting",
            "Management assessment of controls",
            "Auditor attestation",
            "Disclosure controls and procedures",
        ]),
        "ISO27001" | "ISO 27001" => Some(&[
            "Information security management system",
            "Risk assessment and treatment",
            "Security controls implementation",
            "Continuous monitoring and improvement",
        ]),
        _ => None,
    }
}
