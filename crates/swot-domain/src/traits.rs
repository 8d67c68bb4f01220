//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;

/// Trait for generation service operations
///
/// Implemented by the infrastructure layer (swot-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error: std::fmt::Display;

    /// Identifier of the model requests are sent to
    fn model_name(&self) -> &str;

    /// Generate a JSON response constrained to `schema`
    ///
    /// `schema` is a JSON Schema document serialized as a string. The
    /// returned text is the raw model output, untrimmed and unparsed.
    fn generate_structured(
        &self,
        prompt: &str,
        schema: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
