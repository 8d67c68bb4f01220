//! Reading a submission from flags or a file.

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use swot_domain::{Category, SwotInput};

/// Build the submission described by the command line.
pub fn from_args(args: &InputArgs) -> Result<SwotInput> {
    if let Some(path) = &args.input {
        return load_file(path);
    }

    let mut input = SwotInput::default();
    let flags = [
        (Category::Strengths, &args.strengths),
        (Category::Weaknesses, &args.weaknesses),
        (Category::Opportunities, &args.opportunities),
        (Category::Threats, &args.threats),
    ];
    for (category, text) in flags {
        if let Some(text) = text {
            input.set(category, text.as_str());
        }
    }
    Ok(input)
}

/// Load a submission from a `.json` file, or TOML for any other extension.
///
/// Missing quadrants are empty.
pub fn load_file(path: &Path) -> Result<SwotInput> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let input: SwotInput = if is_json {
        serde_json::from_str(&contents)?
    } else {
        toml::from_str(&contents)?
    };

    if input.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "{} does not contain any SWOT entries",
            path.display()
        )));
    }
    Ok(input)
}
