//! Parse model output into an analysis result

use crate::error::PipelineError;
use serde_json::Value;
use swot_domain::AnalysisResult;
use tracing::warn;

/// Parse and check the raw model response
///
/// Stages, each with its own failure cause:
/// 1. JSON syntax → `ResponseParse`
/// 2. Typed shape (required fields, types, suggestion labels) → `SchemaConformance`
/// 3. Conformance rules → `SchemaConformance` when `strict`, repaired otherwise
pub(crate) fn parse_analysis_response(
    response: &str,
    strict: bool,
) -> Result<AnalysisResult, PipelineError> {
    let json_str = extract_json(response);

    let json: Value = serde_json::from_str(json_str)
        .map_err(|e| PipelineError::ResponseParse(e.to_string()))?;

    let result: AnalysisResult = serde_json::from_value(json)
        .map_err(|e| PipelineError::SchemaConformance(e.to_string()))?;

    if strict {
        let issues = result.conformance_issues();
        if !issues.is_empty() {
            let summary = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PipelineError::SchemaConformance(summary));
        }
        return Ok(result);
    }

    let (result, issues) = result.normalized();
    for issue in &issues {
        if issue.is_repairable() {
            warn!("Dropped suggestion: {}", issue);
        } else {
            warn!("Accepted non-conforming response: {}", issue);
        }
    }
    Ok(result)
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(fenced) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Skip the opening fence line (```json or ```)
    let body = match fenced.find('\n') {
        Some(newline) => &fenced[newline + 1..],
        None => "",
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swot_domain::Category;

    const VALID: &str = r#"{
        "strengths": { "items": [
            { "item": "Marca fuerte", "isCorrect": true, "reasoning": "Interno y positivo." }
        ]},
        "weaknesses": { "items": [] },
        "opportunities": { "items": [] },
        "threats": { "items": [
            { "item": "Mercados emergentes", "isCorrect": false,
              "reasoning": "Es un factor externo positivo.", "suggestion": "Opportunities" }
        ]},
        "overallFeedback": "Revisa la categoría de amenazas."
    }"#;

    #[test]
    fn test_parse_valid_json() {
        let result = parse_analysis_response(VALID, true).unwrap();
        assert_eq!(result.category(Category::Strengths).len(), 1);
        assert!(result.category(Category::Strengths).items[0].is_correct);
        assert_eq!(
            result.category(Category::Threats).items[0].suggestion,
            Some(Category::Opportunities)
        );
        assert_eq!(result.overall_feedback(), "Revisa la categoría de amenazas.");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let padded = format!("\n\n   {}   \n", VALID);
        assert!(parse_analysis_response(&padded, true).is_ok());
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let fenced = format!("```json\n{}\n```", VALID);
        assert!(parse_analysis_response(&fenced, true).is_ok());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_analysis_response("not json", true);
        assert!(matches!(result, Err(PipelineError::ResponseParse(_))));

        let result = parse_analysis_response("", true);
        assert!(matches!(result, Err(PipelineError::ResponseParse(_))));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let result = parse_analysis_response(r#"[1, 2, 3]"#, true);
        assert!(matches!(result, Err(PipelineError::SchemaConformance(_))));

        let missing_feedback = r#"{
            "strengths": { "items": [] }, "weaknesses": { "items": [] },
            "opportunities": { "items": [] }, "threats": { "items": [] }
        }"#;
        let result = parse_analysis_response(missing_feedback, false);
        assert!(matches!(result, Err(PipelineError::SchemaConformance(_))));
    }

    #[test]
    fn test_parse_unknown_suggestion_label() {
        let response = VALID.replace("\"Opportunities\"", "\"Oportunidades\"");
        let result = parse_analysis_response(&response, false);
        assert!(matches!(result, Err(PipelineError::SchemaConformance(_))));
    }

    #[test]
    fn test_strict_rejects_self_suggestion() {
        let response = VALID.replace("\"Opportunities\"", "\"Threats\"");
        match parse_analysis_response(&response, true) {
            Err(PipelineError::SchemaConformance(msg)) => {
                assert!(msg.contains("threats[0]"));
            }
            other => panic!("Expected SchemaConformance, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_repairs_self_suggestion() {
        let response = VALID.replace("\"Opportunities\"", "\"Threats\"");
        let result = parse_analysis_response(&response, false).unwrap();
        let item = &result.category(Category::Threats).items[0];
        assert!(!item.is_correct);
        assert_eq!(item.suggestion, None);
    }

    #[test]
    fn test_strict_rejects_suggestion_on_correct_item() {
        let response = VALID.replace(
            r#""reasoning": "Interno y positivo." }"#,
            r#""reasoning": "Interno y positivo.", "suggestion": "Weaknesses" }"#,
        );
        assert!(matches!(
            parse_analysis_response(&response, true),
            Err(PipelineError::SchemaConformance(_))
        ));

        let result = parse_analysis_response(&response, false).unwrap();
        assert_eq!(result.category(Category::Strengths).items[0].suggestion, None);
    }

    #[test]
    fn test_lenient_tolerates_empty_feedback() {
        let response = VALID.replace("Revisa la categoría de amenazas.", "");
        assert!(parse_analysis_response(&response, true).is_err());
        let result = parse_analysis_response(&response, false).unwrap();
        assert_eq!(result.overall_feedback(), "");
    }

    #[test]
    fn test_extract_json_from_plain_json() {
        let json = r#"{"key": "value"}"#;
        assert_eq!(extract_json(json), json);
    }

    #[test]
    fn test_extract_json_from_markdown() {
        let response = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(response), r#"{"key": "value"}"#);
    }

    #[test]
    fn test_extract_json_from_markdown_without_language() {
        let response = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(response), r#"{"key": "value"}"#);
    }

    #[test]
    fn test_extract_json_unterminated_fence() {
        assert_eq!(extract_json("```json"), "");
        assert_eq!(extract_json("```json\n{}"), "{}");
    }
}
