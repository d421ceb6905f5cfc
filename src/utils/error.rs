use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilmError {
    #[error("Request failed with status {status}")]
    RequestFailed { status: u16 },

    #[error("HTTP transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("GraphQL request returned errors: {message}")]
    GraphQLError { message: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FilmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FilmError::RequestFailed { .. } | FilmError::TransportError(_) => {
                ErrorCategory::Network
            }
            FilmError::SerializationError(_)
            | FilmError::MalformedResponse { .. }
            | FilmError::GraphQLError { .. }
            | FilmError::CsvError(_)
            | FilmError::ValidationError { .. } => ErrorCategory::Data,
            FilmError::ConfigError { .. }
            | FilmError::ConfigValidationError { .. }
            | FilmError::InvalidConfigValueError { .. }
            | FilmError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FilmError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常重跑即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FilmError::RequestFailed { status } if *status >= 500 => {
                "The GraphQL server reported an internal error; check the backend logs".to_string()
            }
            FilmError::RequestFailed { .. } => {
                "Check that --base-url and --graphql-path point at the GraphQL endpoint".to_string()
            }
            FilmError::TransportError(_) => {
                "Make sure the GraphQL backend is running and reachable".to_string()
            }
            FilmError::GraphQLError { .. } => {
                "The server rejected the query; check that its schema exposes allFilms".to_string()
            }
            FilmError::SerializationError(_) | FilmError::MalformedResponse { .. } => {
                "The server answered with an unexpected payload; verify the query matches its schema"
                    .to_string()
            }
            FilmError::CsvError(_) | FilmError::IoError(_) => {
                "Check that the output stream is writable".to_string()
            }
            FilmError::ConfigError { .. }
            | FilmError::ConfigValidationError { .. }
            | FilmError::InvalidConfigValueError { .. }
            | FilmError::MissingConfigError { .. } => {
                "Fix the configuration file or command line flags and try again".to_string()
            }
            FilmError::ValidationError { .. } => "Provide a non-empty GraphQL query".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not load films: {}", self),
            ErrorCategory::Data => format!("Could not read the film list: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_is_medium_network_error() {
        let err = FilmError::RequestFailed { status: 500 };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("backend logs"));
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_malformed_response_is_data_error() {
        let err = FilmError::MalformedResponse {
            message: "films is not a list".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("films is not a list"));
    }

    #[test]
    fn test_graphql_error_is_data_error() {
        let err = FilmError::GraphQLError {
            message: "Cannot query field 'allFilms' on type 'Query'.".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("allFilms"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let missing = FilmError::MissingConfigError {
            field: "endpoint.base_url".to_string(),
        };
        let invalid = FilmError::InvalidConfigValueError {
            field: "endpoint.base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert!(invalid.user_friendly_message().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = FilmError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
