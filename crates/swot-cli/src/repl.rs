//! Interactive mode: collect the four quadrants, analyze, repeat.

use crate::error::Result;
use crate::output::Formatter;
use crate::provider::Provider;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;
use swot_analyzer::{AnalysisSession, AnalysisState};
use swot_domain::Category;

/// Run the interactive loop until the user declines another analysis or
/// closes the input.
pub async fn run_repl(
    session: &mut AnalysisSession<Provider>,
    formatter: &Formatter,
    history_size: usize,
    history_path: &Path,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Valida tu FODA: escribe un elemento por línea; una línea vacía termina cada cuadrante. Ctrl-D para salir.")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(history_size)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    if let Some(dir) = history_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let _ = editor.load_history(history_path);

    loop {
        if !collect_input(&mut editor, session, formatter)? {
            break;
        }

        if !session.can_submit() {
            println!("{}", formatter.error("Ingresa al menos un elemento en algún cuadrante."));
            continue;
        }

        println!("{}", formatter.info("Analizando..."));
        match session.submit().await {
            AnalysisState::Succeeded(result) => println!("{}", formatter.format_result(result)?),
            AnalysisState::Failed(error) => eprintln!("{}", formatter.error(error.message())),
            AnalysisState::Idle | AnalysisState::Requesting => {}
        }

        if !confirm(&mut editor, "¿Comenzar un nuevo análisis? [s/N] ")? {
            break;
        }
        session.reset();
        println!();
    }

    editor.save_history(history_path).ok();
    println!("{}", formatter.info("¡Hasta luego!"));

    Ok(())
}

/// Fill every quadrant of the session. Returns false when input is closed.
fn collect_input(
    editor: &mut DefaultEditor,
    session: &mut AnalysisSession<Provider>,
    formatter: &Formatter,
) -> Result<bool> {
    for category in Category::ALL {
        println!("{}", formatter.info(category.spanish_label()));

        match read_block(editor)? {
            Some(text) => session.set_input(category, text),
            None => return Ok(false),
        }
    }
    Ok(true)
}

/// Read lines until an empty one. `None` on end of input.
fn read_block(editor: &mut DefaultEditor) -> Result<Option<String>> {
    let mut lines = Vec::new();

    loop {
        match editor.readline("  > ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    return Ok(Some(lines.join("\n")));
                }
                editor.add_history_entry(line).ok();
                lines.push(line.to_string());
            }
            Err(ReadlineError::Interrupted) => {
                println!("  (cuadrante descartado)");
                return Ok(Some(String::new()));
            }
            Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

fn confirm(editor: &mut DefaultEditor, prompt: &str) -> Result<bool> {
    match editor.readline(prompt) {
        Ok(answer) => Ok(is_yes(&answer)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes")
}
