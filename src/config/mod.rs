pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::adapters::http::{API_KEY_ENV, DEFAULT_ENDPOINT};
use crate::core::discovery::DEFAULT_MAX_ATTEMPTS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const MAX_ATTEMPTS_LIMIT: usize = 100;

/// Reads the API key from the process environment, ignoring blank values.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

#[cfg(feature = "cli")]
#[derive(Clone, serde::Serialize, serde::Deserialize, clap::Parser)]
#[command(name = "dog-discoverer")]
#[command(about = "Discover random dogs, skipping breeds, origins and weights you have banned")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Image search endpoint
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// API key sent as x-api-key (defaults to $DOG_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Attempts per discovery before giving up
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Per-request timeout
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Values to ban from the start, comma separated
    #[arg(long, value_delimiter = ',')]
    pub ban: Vec<String>,

    /// Discover once, print the result and exit
    #[arg(long)]
    pub once: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub log_json: bool,
}

pub(crate) const REDACTED: &str = "***";

// The key must never reach the logs, `main` prints this at debug level.
#[cfg(feature = "cli")]
impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("config", &self.config)
            .field("api_endpoint", &self.api_endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("max_attempts", &self.max_attempts)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("ban", &self.ban)
            .field("once", &self.once)
            .field("verbose", &self.verbose)
            .field("log_json", &self.log_json)
            .finish()
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fills the API key from the environment when no flag was given.
    pub fn resolve_api_key(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = api_key_from_env();
        }
        self
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn initial_ban_list(&self) -> &[String] {
        &self.ban
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every [`ConfigProvider`].
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_url("source.endpoint", config.api_endpoint())?;
    validation::validate_range(
        "discovery.max_attempts",
        config.max_attempts(),
        1,
        MAX_ATTEMPTS_LIMIT,
    )?;
    if let Some(timeout) = config.timeout_seconds() {
        validation::validate_range("source.timeout_seconds", timeout, 1, 300)?;
    }
    if let Some(key) = config.api_key() {
        validation::validate_non_empty_string("source.api_key", key)?;
    }
    validation::validate_ban_values("discovery.ban_list", config.initial_ban_list())?;
    Ok(())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["dog-discoverer"]);
        assert_eq!(config.api_endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.max_attempts(), 10);
        assert!(config.initial_ban_list().is_empty());
        assert!(!config.once);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_ban_list_is_comma_separated() {
        let config = CliConfig::parse_from(["dog-discoverer", "--ban", "Labrador Retriever,France"]);
        assert_eq!(config.initial_ban_list(), ["Labrador Retriever", "France"]);
    }

    #[test]
    fn test_cli_rejects_zero_attempts() {
        let config = CliConfig::parse_from(["dog-discoverer", "--max-attempts", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_rejects_bad_endpoint() {
        let config = CliConfig::parse_from(["dog-discoverer", "--api-endpoint", "ftp://dogs"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let config = CliConfig::parse_from(["dog-discoverer", "--api-key", "live_SECRET123"]);
        let printed = format!("{:?}", config);
        assert!(!printed.contains("live_SECRET123"));
        assert!(printed.contains("api_key: Some(\"***\")"));
    }

    #[test]
    fn test_explicit_key_wins_over_environment() {
        let config = CliConfig::parse_from(["dog-discoverer", "--api-key", "from-flag"]).resolve_api_key();
        assert_eq!(config.api_key(), Some("from-flag"));
    }
}
