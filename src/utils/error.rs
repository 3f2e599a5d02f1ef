use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status}: {reason}")]
    HttpStatusError { status: u16, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Command error: {message}")]
    CommandError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DiscoveryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DiscoveryError::ApiError(_) | DiscoveryError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            DiscoveryError::SerializationError(_) => ErrorCategory::Data,
            DiscoveryError::ConfigError { .. }
            | DiscoveryError::ConfigValidationError { .. }
            | DiscoveryError::InvalidConfigValueError { .. }
            | DiscoveryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DiscoveryError::CommandError { .. } => ErrorCategory::Input,
            DiscoveryError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DiscoveryError::ApiError(e) if e.is_timeout() => {
                "The dog API did not answer in time".to_string()
            }
            DiscoveryError::ApiError(_) => "Could not reach the dog API".to_string(),
            DiscoveryError::HttpStatusError { status, .. } => {
                format!("The dog API rejected the request (HTTP {})", status)
            }
            DiscoveryError::SerializationError(_) => {
                "The dog API sent a response that could not be read".to_string()
            }
            DiscoveryError::IoError(e) => format!("Terminal or file error: {}", e),
            DiscoveryError::ConfigError { message } => message.clone(),
            DiscoveryError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            DiscoveryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DiscoveryError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            DiscoveryError::CommandError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DiscoveryError::ApiError(_) => "Check your network connection and try again",
            DiscoveryError::HttpStatusError { status: 401, .. }
            | DiscoveryError::HttpStatusError { status: 403, .. } => {
                "Check that DOG_API_KEY holds a valid API key"
            }
            DiscoveryError::HttpStatusError { .. } => "Wait a moment and discover again",
            DiscoveryError::SerializationError(_) => "Discover again; the API may be degraded",
            DiscoveryError::IoError(_) => "Check file permissions and that the path exists",
            DiscoveryError::ConfigError { .. }
            | DiscoveryError::ConfigValidationError { .. }
            | DiscoveryError::InvalidConfigValueError { .. }
            | DiscoveryError::MissingConfigError { .. } => {
                "Fix the configuration file or command-line flags and run again"
            }
            DiscoveryError::CommandError { .. } => "Type 'help' to list the available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_are_network_errors() {
        let err = DiscoveryError::HttpStatusError {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = DiscoveryError::MissingConfigError {
            field: "source.endpoint".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "Setting 'source.endpoint' is required");
    }

    #[test]
    fn test_auth_status_points_at_api_key() {
        let err = DiscoveryError::HttpStatusError {
            status: 401,
            reason: "Unauthorized".to_string(),
        };
        assert!(err.recovery_suggestion().contains("DOG_API_KEY"));
    }
}
