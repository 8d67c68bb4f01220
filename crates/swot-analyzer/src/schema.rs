//! Structured-output schema sent to the generation service
//!
//! The item and category fragments are defined once and reused for all four
//! categories. The wire shape matches `swot_domain::AnalysisResult`.

use serde_json::{json, Map, Value};
use swot_domain::Category;

/// Key of the overall feedback field
pub(crate) const OVERALL_FEEDBACK_KEY: &str = "overallFeedback";

/// JSON Schema of one analyzed entry
fn item_schema() -> Value {
    let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();
    json!({
        "type": "object",
        "properties": {
            "item": { "type": "string" },
            "isCorrect": { "type": "boolean" },
            "reasoning": { "type": "string" },
            "suggestion": { "type": "string", "enum": labels }
        },
        "required": ["item", "isCorrect", "reasoning"]
    })
}

/// JSON Schema of one category's entries
fn category_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "items": { "type": "array", "items": item_schema() }
        },
        "required": ["items"]
    })
}

/// JSON Schema of a complete analysis result
pub fn response_schema() -> Value {
    let category = category_schema();

    let mut properties = Map::new();
    for c in Category::ALL {
        properties.insert(c.key().to_string(), category.clone());
    }
    properties.insert(
        OVERALL_FEEDBACK_KEY.to_string(),
        json!({
            "type": "string",
            "description": "Un resumen breve y general de la calidad del análisis FODA."
        }),
    );

    let mut required: Vec<&str> = Category::ALL.iter().map(Category::key).collect();
    required.push(OVERALL_FEEDBACK_KEY);

    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}
