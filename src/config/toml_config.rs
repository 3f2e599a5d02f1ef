use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::config::{api_key_from_env, validate_provider};
use crate::core::discovery::DEFAULT_MAX_ATTEMPTS;
use crate::core::ConfigProvider;
use crate::utils::error::{DiscoveryError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub max_attempts: Option<usize>,
    #[serde(default)]
    pub ban_list: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DiscoveryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| DiscoveryError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        // 未展開的 ${VAR} 視為未設定
        if config
            .source
            .api_key
            .as_deref()
            .is_some_and(|key| key.starts_with("${") || key.trim().is_empty())
        {
            config.source.api_key = None;
        }
        if config.source.api_key.is_none() {
            config.source.api_key = api_key_from_env();
        }

        Ok(config)
    }

    /// 替換環境變數 (例如 ${DOG_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DiscoveryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// Layers command-line values over the file. Ban values are appended.
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(endpoint) = &cli.api_endpoint {
            self.source.endpoint = endpoint.clone();
        }
        if let Some(key) = &cli.api_key {
            self.source.api_key = Some(key.clone());
        }
        if let Some(timeout) = cli.timeout_seconds {
            self.source.timeout_seconds = Some(timeout);
        }
        if let Some(max_attempts) = cli.max_attempts {
            self.discovery.max_attempts = Some(max_attempts);
        }
        for value in &cli.ban {
            if !self.discovery.ban_list.contains(value) {
                self.discovery.ban_list.push(value.clone());
            }
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.source.api_key.as_deref()
    }

    fn max_attempts(&self) -> usize {
        self.discovery.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.source.timeout_seconds
    }

    fn initial_ban_list(&self) -> &[String] {
        &self.discovery.ban_list
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
