//! Provider types and traits

use std::fmt;

use crate::coord::TileCoord;

/// Errors that can occur during provider operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// HTTP request failed or returned a non-success status
    HttpError(String),
    /// Response body is not usable as tile data
    InvalidResponse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Trait for remote tile sources.
///
/// Implementors download the raw bytes of a single tile addressed by its
/// grid position. A missing tile is an error here; the fetch loop decides
/// whether that is fatal (it never is - the grid is sparse at the edges).
pub trait TileProvider: Send + Sync {
    /// Downloads one tile image.
    ///
    /// # Arguments
    ///
    /// * `coord` - Grid position of the tile
    ///
    /// # Returns
    ///
    /// Raw image data (PNG) or an error.
    fn download_tile(&self, coord: TileCoord) -> Result<Vec<u8>, ProviderError>;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ProviderError::HttpError("HTTP 404 from http://example.com".to_string());
        assert!(err.to_string().contains("HTTP error"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_invalid_response_display() {
        let err = ProviderError::InvalidResponse("empty body".to_string());
        assert_eq!(err.to_string(), "Invalid response: empty body");
    }
}
