//! Caller-side state machine around one analyzer
//!
//! ```text
//! Idle ──submit──▶ Requesting ──▶ Succeeded(result)
//!                            └──▶ Failed(error)
//! ```
//!
//! A result and an error are never present at the same time; a new
//! submission clears whichever the previous one produced.

use crate::analyzer::Analyzer;
use crate::error::AnalysisError;
use swot_domain::traits::LlmProvider;
use swot_domain::{AnalysisResult, Category, SwotInput};
use tracing::debug;

/// Observable state of an [`AnalysisSession`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalysisState {
    /// Nothing submitted yet, or reset
    #[default]
    Idle,

    /// A request is outstanding
    Requesting,

    /// The last submission produced a critique
    Succeeded(AnalysisResult),

    /// The last submission failed
    Failed(AnalysisError),
}

impl AnalysisState {
    /// Whether a request is outstanding
    pub fn is_requesting(&self) -> bool {
        matches!(self, AnalysisState::Requesting)
    }

    /// Critique of the last submission, if it succeeded
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Error of the last submission, if it failed
    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            AnalysisState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Input being edited plus the outcome of the last submission
///
/// If a [`AnalysisSession::submit`] future is dropped before it completes
/// (for example by a caller-side timeout), the session returns to `Idle`
/// with its input kept.
pub struct AnalysisSession<L>
where
    L: LlmProvider,
{
    analyzer: Analyzer<L>,
    input: SwotInput,
    state: AnalysisState,
}

impl<L> AnalysisSession<L>
where
    L: LlmProvider,
{
    /// Start an idle session with empty input
    pub fn new(analyzer: Analyzer<L>) -> Self {
        Self {
            analyzer,
            input: SwotInput::default(),
            state: AnalysisState::Idle,
        }
    }

    /// Current input
    pub fn input(&self) -> &SwotInput {
        &self.input
    }

    /// Current state
    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Replace one quadrant of the input
    pub fn set_input(&mut self, category: Category, text: impl Into<String>) {
        self.input.set(category, text);
    }

    /// Replace the whole input
    pub fn replace_input(&mut self, input: SwotInput) {
        self.input = input;
    }

    /// Whether a submission would be sent
    ///
    /// False when every quadrant is blank or a request is outstanding.
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !self.state.is_requesting()
    }

    /// Submit the current input and wait for the outcome
    ///
    /// When [`AnalysisSession::can_submit`] is false the state is left
    /// untouched and no request is made.
    pub async fn submit(&mut self) -> &AnalysisState {
        if !self.can_submit() {
            debug!("Submission ignored: input is blank or a request is outstanding");
            return &self.state;
        }

        let pending = PendingRequest::start(&mut self.state);
        let outcome = match self.analyzer.analyze(&self.input).await {
            Ok(result) => AnalysisState::Succeeded(result),
            Err(error) => AnalysisState::Failed(error),
        };
        pending.finish(outcome);
        &self.state
    }

    /// Clear the input and return to `Idle`
    pub fn reset(&mut self) {
        self.input = SwotInput::default();
        self.state = AnalysisState::Idle;
    }
}

/// Holds the session in `Requesting` for the duration of one call
///
/// Dropped without [`PendingRequest::finish`] means the call was cancelled;
/// the state falls back to `Idle`.
struct PendingRequest<'a> {
    state: &'a mut AnalysisState,
}

impl<'a> PendingRequest<'a> {
    fn start(state: &'a mut AnalysisState) -> Self {
        *state = AnalysisState::Requesting;
        Self { state }
    }

    fn finish(self, outcome: AnalysisState) {
        *self.state = outcome;
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if self.state.is_requesting() {
            debug!("Submission cancelled before completion");
            *self.state = AnalysisState::Idle;
        }
    }
}
