use thiserror::Error;

/// Configuration problems detected at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A configured URL failed to parse.
    #[error("Invalid URL in configuration: {0}")]
    InvalidUrl(String),
}
