//! Combine command - stitch downloaded tiles into composite images.

use tracing::info;

use clickdrag::compose::Compositor;
use clickdrag::config::StitchConfig;
use clickdrag::tile::{load_tiles, DirTileSource};

use crate::error::CliError;

/// Loads the tile directory and writes the configured composite outputs.
///
/// An empty tile directory is a clean terminal condition: a message is
/// printed and the command succeeds without writing anything.
pub fn run(config: &StitchConfig) -> Result<(), CliError> {
    let source = DirTileSource::new(&config.image_dir);
    let tiles = load_tiles(&source, config.tile_size)?;

    if tiles.is_empty() {
        println!("No tiles were loaded. Please check the directory and file names.");
        return Ok(());
    }
    info!(tiles = tiles.len(), "loaded tile set");

    let compositor = Compositor::new(&tiles, config.tile_size)?;
    let summary = compositor.compose(&config.mode, &config.output_dir())?;
    info!(
        written = summary.written,
        failed = summary.failed,
        "combine complete"
    );
    Ok(())
}
