//! Clickdrag - fetch and stitch the xkcd "Click and Drag" tile grid
//!
//! This library downloads the tile set behind xkcd #1110 "Click and Drag"
//! and reassembles the tiles into large composite images by their grid
//! position.
//!
//! # High-Level Flow
//!
//! ```ignore
//! use clickdrag::compose::Compositor;
//! use clickdrag::config::StitchConfig;
//! use clickdrag::tile::{load_tiles, DirTileSource};
//!
//! let config = StitchConfig::new("/images");
//! let source = DirTileSource::new(&config.image_dir);
//! let tiles = load_tiles(&source, config.tile_size)?;
//!
//! let compositor = Compositor::new(&tiles, config.tile_size)?;
//! compositor.compose(&config.mode, &config.output_dir())?;
//! ```

pub mod compose;
pub mod config;
pub mod coord;
pub mod fetch;
pub mod logging;
pub mod provider;
pub mod tile;

/// Version of the clickdrag library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
