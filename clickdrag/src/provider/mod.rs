//! Tile image provider abstraction
//!
//! This module provides traits and implementations for downloading the
//! comic's tile images over HTTP. The [`HttpClient`] trait decouples the
//! providers from the network so tests can run against mocks.

mod http;
mod types;
mod xkcd;

pub use http::{HttpClient, ReqwestClient};
pub use types::{ProviderError, TileProvider};
pub use xkcd::XkcdProvider;

#[cfg(test)]
pub use http::tests::MockHttpClient;
