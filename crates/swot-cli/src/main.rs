//! swot - Check the classification of a SWOT analysis with a generative model.

use clap::Parser;
use swot_analyzer::{AnalysisSession, Analyzer};
use swot_cli::commands;
use swot_cli::{input, repl};
use swot_cli::{Cli, Command, Config, Formatter, Provider};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so text and JSON output stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> swot_cli::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    debug!(path = %config_path.display(), "Loading configuration");
    let mut config = Config::load_from(&config_path)?;
    cli.apply_to(&mut config);

    let formatter = Formatter::new(config.settings.format, config.settings.color);

    match cli.command {
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
        None if cli.input.is_present() => {
            let submission = input::from_args(&cli.input)?;
            let mut session = build_session(&config, cli.api_key)?;
            commands::execute_analyze(submission, &mut session, &formatter).await?;
        }
        None | Some(Command::Repl) => {
            let mut session = build_session(&config, cli.api_key)?;
            let history_path = Config::history_path(&config_path);
            repl::run_repl(&mut session, &formatter, config.settings.history_size, &history_path).await?;
        }
    }

    Ok(())
}

fn build_session(config: &Config, api_key: Option<String>) -> swot_cli::Result<AnalysisSession<Provider>> {
    let api_key = api_key.or_else(|| std::env::var("API_KEY").ok());
    let provider = Provider::from_settings(&config.provider, api_key)?;
    Ok(AnalysisSession::new(Analyzer::new(provider, config.analyzer.clone())))
}
