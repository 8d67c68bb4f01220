//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, PipelineError};
use crate::parser::parse_analysis_response;
use crate::request::AnalysisRequest;
use std::sync::Arc;
use swot_domain::traits::LlmProvider;
use swot_domain::{AnalysisResult, SwotInput};
use tokio::time::timeout;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

/// The Analyzer sends one submission to the model and returns its critique
///
/// Each call to [`Analyzer::analyze`] is independent: there is no caching,
/// no conversation state and no retry.
pub struct Analyzer<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: AnalyzerConfig,
}

impl<L> Clone for Analyzer<L>
where
    L: LlmProvider,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            config: self.config.clone(),
        }
    }
}

impl<L> Analyzer<L>
where
    L: LlmProvider,
{
    /// Create a new Analyzer around an explicitly configured provider
    pub fn new(provider: L, config: AnalyzerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Create a new Analyzer with the default configuration
    pub fn with_defaults(provider: L) -> Self {
        Self::new(provider, AnalyzerConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Underlying generation service
    pub fn provider(&self) -> &L {
        &self.provider
    }

    /// Review a submission
    ///
    /// Either a complete [`AnalysisResult`] is returned or a single
    /// [`AnalysisError`] whose message is fixed; the cause is logged.
    pub async fn analyze(&self, input: &SwotInput) -> Result<AnalysisResult, AnalysisError> {
        let request_id = Uuid::now_v7();
        let span = info_span!(
            "analyze_swot",
            %request_id,
            model = self.provider.model_name()
        );

        match self.run(input).instrument(span).await {
            Ok(result) => Ok(result),
            Err(cause) => {
                let err = AnalysisError::new(cause);
                error!(%request_id, cause = %err.cause(), "Error analyzing SWOT");
                Err(err)
            }
        }
    }

    async fn run(&self, input: &SwotInput) -> Result<AnalysisResult, PipelineError> {
        let chars = input.char_count();
        if chars > self.config.max_input_chars {
            return Err(PipelineError::InputTooLong(chars, self.config.max_input_chars));
        }

        let request = AnalysisRequest::build(input);
        debug!(
            prompt_len = request.prompt().len(),
            schema_len = request.schema_json().len(),
            "Built analysis request"
        );

        let call = self
            .provider
            .generate_structured(request.prompt(), request.schema_json());

        let raw = match self.config.request_timeout() {
            Some(limit) => timeout(limit, call)
                .await
                .map_err(|_| PipelineError::Timeout(limit))?,
            None => call.await,
        }
        .map_err(|e| PipelineError::ServiceInvocation(e.to_string()))?;

        debug!(response_len = raw.len(), "Received model response");

        let result = parse_analysis_response(&raw, self.config.strict_validation)?;

        info!(
            items = result.total_items(),
            misplaced = result.misplaced().count(),
            "Analysis complete"
        );

        Ok(result)
    }
}
