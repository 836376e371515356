use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use jotter_llm::ProviderConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub mongodb: MongoDbConfig,
    pub llm: LlmConfig,
    pub journal: JournalConfig,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub mongodb_uri: String,
    #[serde(default)]
    pub llm_api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoDbConfig {
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Which generative backend to use: "gemini" or "openai"
    pub provider: String,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JournalConfig {
    /// How many recent entries the theme aggregation window covers
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,
    /// Theme count at which the reflection nudge fires
    #[serde(default = "default_nudge_threshold")]
    pub nudge_threshold: u64,
}

fn default_recent_window() -> usize {
    10
}

fn default_nudge_threshold() -> u64 {
    3
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            recent_window: default_recent_window(),
            nudge_threshold: default_nudge_threshold(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables (with SERVER_, MONGODB_, LLM_, etc. prefixes)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            // 1. Load default config
            .add_source(File::with_name("config/default").required(false))
            // 2. Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // 3. Environment variables override everything
            .add_source(
                Environment::default()
                    .prefix("SERVER")
                    .separator("_")
                    .try_parsing(true),
            )
            .add_source(
                Environment::default()
                    .prefix("MONGODB")
                    .separator("_")
                    .try_parsing(true),
            )
            .add_source(
                Environment::default()
                    .prefix("LLM")
                    .separator("_")
                    .try_parsing(true),
            )
            .add_source(
                Environment::default()
                    .prefix("JOURNAL")
                    .separator("_")
                    .try_parsing(true),
            )
            .add_source(
                Environment::default()
                    .prefix("LOG")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;

        let mut cfg: Config = config.try_deserialize()?;

        // Load secrets from ENV (not in TOML)
        cfg.mongodb_uri = std::env::var("MONGODB_URI").map_err(|_| {
            ConfigError::Message("MONGODB_URI environment variable is required".to_string())
        })?;
        cfg.llm_api_key = match cfg.llm.provider.as_str() {
            "openai" => std::env::var("OPENAI_API_KEY").map_err(|_| {
                ConfigError::Message("OPENAI_API_KEY environment variable is required".to_string())
            })?,
            _ => std::env::var("GEMINI_API_KEY").map_err(|_| {
                ConfigError::Message("GEMINI_API_KEY environment variable is required".to_string())
            })?,
        };

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Build the provider configuration for the configured generative backend
    pub fn provider_config(&self) -> Result<ProviderConfig, ConfigError> {
        match self.llm.provider.as_str() {
            "gemini" => Ok(ProviderConfig::gemini(self.llm_api_key.clone())),
            "openai" => Ok(ProviderConfig::openai(self.llm_api_key.clone())),
            other => Err(ConfigError::Message(format!(
                "Unknown LLM provider: {} (expected \"gemini\" or \"openai\")",
                other
            ))),
        }
    }
}
