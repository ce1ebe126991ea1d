//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::llm::ResponseFormat;
use crate::normalize::ResponseMode;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Ollama inference settings
    #[serde(default)]
    pub ollama: OllamaSettings,

    /// Question generation settings
    #[serde(default)]
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaSettings {
    /// Inference provider (ollama)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Base URL of the Ollama server
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name passed to /api/generate
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Response format requested from the model (json, text)
    #[serde(default)]
    pub format: ResponseFormat,

    /// Legacy streaming mode: newline-delimited envelope fragments
    /// instead of a single JSON envelope
    #[serde(default)]
    pub stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Maximum number of characters of uploaded source text to embed in
    /// the prompt; longer text is truncated to this prefix
    #[serde(default = "default_max_source_chars")]
    pub max_source_chars: usize,
}

// Default value functions

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "mistral".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_source_chars() -> usize {
    8000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            format: ResponseFormat::default(),
            stream: false,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_source_chars: default_max_source_chars(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            ollama: OllamaSettings::default(),
            generation: GenerationSettings::default(),
        }
    }
}

impl OllamaSettings {
    /// Which normalization path replies from this deployment take.
    ///
    /// The two modes produce different output shapes; callers must not
    /// assume the question-set schema when streaming is enabled.
    pub fn response_mode(&self) -> ResponseMode {
        if self.stream {
            ResponseMode::Stream
        } else {
            ResponseMode::Json
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path()?)
    }

    /// Load settings from a specific configuration file
    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("QUIZGEN_OLLAMA_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.ollama.endpoint = endpoint;
            }
        }
        if let Ok(model) = std::env::var("QUIZGEN_OLLAMA_MODEL") {
            if !model.trim().is_empty() {
                self.ollama.model = model;
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "quizgen", "quizgen")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
