//! Configuration loading tests against real files on disk.

use quizgen::config::Settings;
use tempfile::TempDir;

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("create temp dir");
    let settings = Settings::load_from(dir.path().join("nonexistent.toml"))
        .expect("missing file should not be an error");

    assert_eq!(settings.ollama.endpoint, "http://localhost:11434");
    assert_eq!(settings.server.port, 8080);
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        [server]
        port = 9090

        [ollama]
        model = "llama3"
        stream = true

        [generation]
        max_source_chars = 500
        "#,
    )
    .expect("write config");

    let settings = Settings::load_from(&path).expect("config should parse");
    assert_eq!(settings.server.port, 9090);
    assert_eq!(settings.ollama.model, "llama3");
    assert!(settings.ollama.stream);
    assert_eq!(settings.generation.max_source_chars, 500);
}

#[test]
fn invalid_config_file_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not valid toml [[[").expect("write config");

    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn write_default_produces_a_loadable_config() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("nested").join("config.toml");

    Settings::write_default(&path).expect("write default config");
    let settings = Settings::load_from(&path).expect("default config should load");

    assert_eq!(settings.ollama.model, "mistral");
}
