//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// SWOT reviewer - Check whether each SWOT entry sits in the right quadrant.
#[derive(Debug, Parser)]
#[command(name = "swot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub input: InputArgs,

    /// Generation service
    #[arg(long, value_enum, global = true)]
    pub provider: Option<ProviderArg>,

    /// Model identifier
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Service base URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// API key for the Gemini service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject responses that break a conformance rule
    #[arg(long, global = true, conflicts_with = "lenient")]
    pub strict: bool,

    /// Repair responses that break a conformance rule
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The four quadrants, given inline or through a file.
#[derive(Debug, Default, Args)]
pub struct InputArgs {
    /// Strengths, one per line
    #[arg(short, long)]
    pub strengths: Option<String>,

    /// Weaknesses, one per line
    #[arg(short, long)]
    pub weaknesses: Option<String>,

    /// Opportunities, one per line
    #[arg(short, long)]
    pub opportunities: Option<String>,

    /// Threats, one per line
    #[arg(short, long)]
    pub threats: Option<String>,

    /// TOML or JSON file with the four quadrants
    #[arg(short, long, conflicts_with_all = ["strengths", "weaknesses", "opportunities", "threats"])]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Whether any quadrant or input file was given.
    pub fn is_present(&self) -> bool {
        self.input.is_some()
            || self.strengths.is_some()
            || self.weaknesses.is_some()
            || self.opportunities.is_some()
            || self.threats.is_some()
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter interactive mode
    Repl,

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Readable report (default)
    Text,
    /// JSON in the response wire shape
    Json,
}

/// Generation service options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProviderArg {
    /// Google Gemini
    Gemini,
    /// Local Ollama server
    Ollama,
}

impl Cli {
    /// Validation mode requested on the command line, if any.
    pub fn strict_override(&self) -> Option<bool> {
        match (self.strict, self.lenient) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Overlay the command-line flags on a loaded configuration.
    pub fn apply_to(&self, config: &mut crate::config::Config) {
        if let Some(provider) = self.provider {
            config.provider.kind = provider.into();
        }
        if let Some(model) = &self.model {
            config.provider.model = Some(model.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            config.provider.endpoint = Some(endpoint.clone());
        }
        if let Some(strict) = self.strict_override() {
            config.analyzer.strict_validation = strict;
        }
        if let Some(format) = self.format {
            config.settings.format = format.into();
        }
        if self.no_color {
            config.settings.color = false;
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<ProviderArg> for crate::config::ProviderKind {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Gemini => crate::config::ProviderKind::Gemini,
            ProviderArg::Ollama => crate::config::ProviderKind::Ollama,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["swot"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.input.is_present());
        assert_eq!(cli.strict_override(), None);
    }

    #[test]
    fn test_quadrant_flags() {
        let cli = Cli::try_parse_from([
            "swot",
            "-s",
            "Marca fuerte",
            "-t",
            "Competencia intensa",
            "--lenient",
        ])
        .unwrap();
        assert_eq!(cli.input.strengths.as_deref(), Some("Marca fuerte"));
        assert_eq!(cli.input.threats.as_deref(), Some("Competencia intensa"));
        assert!(cli.input.is_present());
        assert_eq!(cli.strict_override(), Some(false));
    }

    #[test]
    fn test_input_file_conflicts_with_flags() {
        let result = Cli::try_parse_from(["swot", "-i", "foda.toml", "-s", "Marca fuerte"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_strict_conflicts_with_lenient() {
        assert!(Cli::try_parse_from(["swot", "--strict", "--lenient"]).is_err());
    }

    #[test]
    fn test_config_command() {
        let cli = Cli::try_parse_from(["swot", "config", "init", "--force"]).unwrap();
        match cli.command {
            Some(Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            })) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "swot",
            "--provider",
            "ollama",
            "--model",
            "mistral",
            "--format",
            "json",
            "--no-color",
            "--lenient",
        ])
        .unwrap();

        let mut config = crate::config::Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config.provider.kind, crate::config::ProviderKind::Ollama);
        assert_eq!(config.provider.model.as_deref(), Some("mistral"));
        assert_eq!(config.settings.format, crate::config::OutputFormat::Json);
        assert!(!config.settings.color);
        assert!(!config.analyzer.strict_validation);
    }

    #[test]
    fn test_provider_conversion() {
        let kind: crate::config::ProviderKind = ProviderArg::Ollama.into();
        assert_eq!(kind, crate::config::ProviderKind::Ollama);
    }
}
