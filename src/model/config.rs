use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "LOAD_CALC_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_PRICE_LABEL: &str = "$9 one-time";

/// Which scoring formula classifies answer sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringModel {
    /// Responsibility adds 10/15 points; categories ranked by stable sort
    #[default]
    Weighted,
    /// Responsibility folds half-weight into the raw sums; emotional needs a
    /// 5 point margin to dominate
    Margin,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub model: ScoringModel,
}

/// Upsell copy for the breakdown offer. Nothing is charged.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferConfig {
    #[serde(default = "default_price_label")]
    pub price_label: String,
}

impl Default for OfferConfig {
    fn default() -> Self {
        Self {
            price_label: default_price_label(),
        }
    }
}

fn default_price_label() -> String {
    DEFAULT_PRICE_LABEL.to_string()
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub offer: OfferConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub offer: OfferConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            offer: OfferConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = Self::load_config_file(&config_path).unwrap_or_default();

        Self {
            scoring: file.scoring,
            offer: file.offer,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config(&contents).map_or_else(
                |e| {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                    None
                },
                |config| {
                    tracing::info!(path = %path.display(), model = ?config.scoring.model, "Loaded configuration from file");
                    Some(config)
                },
            ),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    /// Parse YAML contents; an empty document means defaults
    fn parse_config(contents: &str) -> Result<ConfigFile, serde_yaml::Error> {
        let contents = contents.trim();
        if contents.is_empty() {
            return Ok(ConfigFile::default());
        }
        serde_yaml::from_str(contents)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
