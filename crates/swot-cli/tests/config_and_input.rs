//! File-based configuration and input loading.

use std::fs;
use swot_cli::config::{OutputFormat, ProviderKind};
use swot_cli::{input, CliError, Config};
use swot_domain::Category;
use tempfile::TempDir;

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.provider.kind, ProviderKind::Gemini);
    assert!(config.analyzer.strict_validation);
}

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.provider.kind = ProviderKind::Ollama;
    config.provider.model = Some("mistral".to_string());
    config.analyzer.request_timeout_secs = Some(45);
    config.settings.format = OutputFormat::Json;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.provider.kind, ProviderKind::Ollama);
    assert_eq!(loaded.provider.model.as_deref(), Some("mistral"));
    assert_eq!(loaded.analyzer.request_timeout_secs, Some(45));
    assert_eq!(loaded.settings.format, OutputFormat::Json);
}

#[test]
fn test_invalid_analyzer_settings_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[analyzer]\nmax_input_chars = 0\n").unwrap();

    assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
}

#[test]
fn test_malformed_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[provider\nkind = ").unwrap();

    assert!(matches!(Config::load_from(&path), Err(CliError::Toml(_))));
}

#[test]
fn test_load_toml_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foda.toml");
    fs::write(
        &path,
        r#"
strengths = """
Fuerte reconocimiento de marca
Equipo experimentado
"""
threats = "Competencia intensa"
"#,
    )
    .unwrap();

    let submission = input::load_file(&path).unwrap();
    assert_eq!(
        submission.items(Category::Strengths),
        vec!["Fuerte reconocimiento de marca", "Equipo experimentado"]
    );
    assert_eq!(submission.items(Category::Threats), vec!["Competencia intensa"]);
    assert!(submission.is_blank(Category::Opportunities));
}

#[test]
fn test_load_json_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foda.JSON");
    fs::write(
        &path,
        r#"{ "weaknesses": "Altos costos operativos\nSistemas de TI obsoletos" }"#,
    )
    .unwrap();

    let submission = input::load_file(&path).unwrap();
    assert_eq!(submission.items(Category::Weaknesses).len(), 2);
    assert!(submission.is_blank(Category::Strengths));
}

#[test]
fn test_empty_input_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foda.json");
    fs::write(&path, r#"{ "strengths": "   " }"#).unwrap();

    assert!(matches!(input::load_file(&path), Err(CliError::InvalidInput(_))));
}
