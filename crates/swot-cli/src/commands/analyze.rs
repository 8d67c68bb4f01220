//! One-shot analysis of a submission given on the command line.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use swot_analyzer::{AnalysisSession, AnalysisState};
use swot_domain::traits::LlmProvider;
use swot_domain::SwotInput;

/// Execute one analysis and print the critique.
///
/// An all-blank submission is rejected before any service call; a failed
/// analysis surfaces as [`CliError::Analysis`].
pub async fn execute_analyze<L>(
    input: SwotInput,
    session: &mut AnalysisSession<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider,
{
    session.replace_input(input);
    if !session.can_submit() {
        return Err(CliError::InvalidInput(
            "At least one quadrant must contain an entry".to_string(),
        ));
    }

    match session.submit().await {
        AnalysisState::Succeeded(result) => {
            println!("{}", formatter.format_result(result)?);
            Ok(())
        }
        AnalysisState::Failed(error) => Err(CliError::Analysis(error.clone())),
        AnalysisState::Idle | AnalysisState::Requesting => Err(CliError::InvalidInput(
            "Submission was not sent".to_string(),
        )),
    }
}
