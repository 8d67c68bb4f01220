//! Error types for the Analyzer

use std::time::Duration;
use thiserror::Error;

/// Message shown to the user for every failed analysis
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "No se pudo obtener el análisis de la IA. Por favor, verifica la entrada e inténtalo de nuevo.";

/// Internal failure causes, logged but never shown to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum PipelineError {
    /// Input exceeds the configured size
    #[error("Input too long: {0} chars (max: {1})")]
    InputTooLong(usize, usize),

    /// The generation service call failed
    #[error("Service invocation failed: {0}")]
    ServiceInvocation(String),

    /// The caller-configured timeout elapsed
    #[error("Service call timed out after {0:?}")]
    Timeout(Duration),

    /// The response text is not JSON
    #[error("Response is not valid JSON: {0}")]
    ResponseParse(String),

    /// The response is JSON but not a conforming analysis result
    #[error("Response does not conform to the analysis schema: {0}")]
    SchemaConformance(String),
}

/// A failed analysis
///
/// Displays as [`ANALYSIS_FAILED_MESSAGE`] whatever went wrong. The
/// underlying cause has already been logged when this value is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", ANALYSIS_FAILED_MESSAGE)]
pub struct AnalysisError {
    cause: PipelineError,
}

impl AnalysisError {
    pub(crate) fn new(cause: PipelineError) -> Self {
        Self { cause }
    }

    /// User-facing message
    pub fn message(&self) -> &'static str {
        ANALYSIS_FAILED_MESSAGE
    }

    pub(crate) fn cause(&self) -> &PipelineError {
        &self.cause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hides_cause() {
        let error = AnalysisError::new(PipelineError::ServiceInvocation(
            "HTTP 403: API key not valid".to_string(),
        ));
        assert_eq!(error.to_string(), ANALYSIS_FAILED_MESSAGE);
        assert_eq!(error.message(), ANALYSIS_FAILED_MESSAGE);
        assert!(!error.to_string().contains("403"));
    }

    #[test]
    fn test_has_no_source() {
        use std::error::Error as _;

        let error = AnalysisError::new(PipelineError::ResponseParse("EOF".to_string()));
        assert!(error.source().is_none());
    }
}
