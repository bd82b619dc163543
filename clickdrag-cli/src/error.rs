//! CLI error handling with user-friendly messages.

use std::fmt;

use clickdrag::compose::ComposeError;
use clickdrag::config::ConfigError;
use clickdrag::fetch::FetchError;
use clickdrag::provider::ProviderError;
use clickdrag::tile::{EmptySetError, TileStoreError};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Invalid command-line configuration
    Config(ConfigError),
    /// Failed to set up the HTTP client
    Provider(ProviderError),
    /// Failed to run the fetch process
    Fetch(FetchError),
    /// Failed to list the tile directory
    TileStore(TileStoreError),
    /// No tiles available to combine
    EmptySet(EmptySetError),
    /// Failed to run the combine process
    Compose(ComposeError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Provider(e) => write!(f, "Provider error: {}", e),
            CliError::Fetch(e) => write!(f, "Fetch failed: {}", e),
            CliError::TileStore(e) => write!(f, "Failed to load tiles: {}", e),
            CliError::EmptySet(e) => write!(f, "Nothing to combine: {}", e),
            CliError::Compose(e) => write!(f, "Combine failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Provider(e) => Some(e),
            CliError::Fetch(e) => Some(e),
            CliError::TileStore(e) => Some(e),
            CliError::EmptySet(e) => Some(e),
            CliError::Compose(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        CliError::Provider(e)
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Fetch(e)
    }
}

impl From<TileStoreError> for CliError {
    fn from(e: TileStoreError) -> Self {
        CliError::TileStore(e)
    }
}

impl From<EmptySetError> for CliError {
    fn from(e: EmptySetError) -> Self {
        CliError::EmptySet(e)
    }
}

impl From<ComposeError> for CliError {
    fn from(e: ComposeError) -> Self {
        CliError::Compose(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err: CliError = ConfigError::MalformedSize("huge".to_string()).into();
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn test_empty_set_display() {
        let err: CliError = EmptySetError.into();
        assert!(err.to_string().contains("Nothing to combine"));
    }
}
