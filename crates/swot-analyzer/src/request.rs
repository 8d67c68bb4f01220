//! The (prompt, schema) pair sent for one analysis

use crate::prompt::PromptBuilder;
use crate::schema::response_schema;
use serde_json::Value;
use swot_domain::SwotInput;

/// Immutable prompt and response schema for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    prompt: String,
    schema: Value,
    schema_json: String,
}

impl AnalysisRequest {
    /// Render the prompt and schema for `input`
    pub fn build(input: &SwotInput) -> Self {
        let schema = response_schema();
        let schema_json = schema.to_string();
        Self {
            prompt: PromptBuilder::new(input).build(),
            schema,
            schema_json,
        }
    }

    /// Instruction prompt
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Response schema
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Response schema serialized as JSON text
    pub fn schema_json(&self) -> &str {
        &self.schema_json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swot_domain::Category;

    #[test]
    fn test_build_is_pure() {
        let input = SwotInput::default().with(Category::Opportunities, "Nuevas tendencias");
        assert_eq!(AnalysisRequest::build(&input), AnalysisRequest::build(&input));
    }

    #[test]
    fn test_schema_json_matches_schema() {
        let request = AnalysisRequest::build(&SwotInput::default());
        let reparsed: Value = serde_json::from_str(request.schema_json()).unwrap();
        assert_eq!(&reparsed, request.schema());
        assert!(request.prompt().contains(crate::NO_INPUT_PLACEHOLDER));
    }
}
