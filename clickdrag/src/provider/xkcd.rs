//! xkcd "Click and Drag" tile provider.
//!
//! The tiles behind xkcd #1110 are served as individual PNG files named by
//! their hemisphere coordinates.
//!
//! # URL Pattern
//!
//! `http://imgs.xkcd.com/clickdrag/{stem}.png`
//!
//! where `{stem}` is the hemisphere name of the tile, e.g. `3n12e`.
//!
//! # Coverage
//!
//! The published grid is sparse: most of the map is empty sky or ground
//! and has no tile at all. The server answers 404 for those positions,
//! which callers treat as "tile does not exist" rather than a failure.

use crate::coord::TileCoord;
use crate::provider::{HttpClient, ProviderError, TileProvider};

/// Base URL for the comic's tile images.
const XKCD_BASE_URL: &str = "http://imgs.xkcd.com/clickdrag";

/// Tile provider for the xkcd "Click and Drag" image server.
///
/// # Example
///
/// ```ignore
/// use clickdrag::provider::{ReqwestClient, XkcdProvider};
///
/// let client = ReqwestClient::new()?;
/// let provider = XkcdProvider::new(client);
/// // Use provider with Fetcher...
/// ```
pub struct XkcdProvider<C: HttpClient> {
    http_client: C,
}

impl<C: HttpClient> XkcdProvider<C> {
    /// Creates a new provider for the comic's tile server.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    pub fn new(http_client: C) -> Self {
        Self { http_client }
    }

    /// Builds the tile URL for the given grid position.
    fn build_url(&self, coord: TileCoord) -> String {
        format!("{}/{}.png", XKCD_BASE_URL, coord.stem())
    }
}

impl<C: HttpClient> TileProvider for XkcdProvider<C> {
    fn download_tile(&self, coord: TileCoord) -> Result<Vec<u8>, ProviderError> {
        let url = self.build_url(coord);
        let bytes = self.http_client.get(&url)?;

        if bytes.is_empty() {
            return Err(ProviderError::InvalidResponse(format!(
                "empty body from {}",
                url
            )));
        }

        Ok(bytes)
    }

    fn name(&self) -> &str {
        "xkcd"
    }
}
