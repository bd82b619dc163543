//! Loading raw tile entries into a normalized tile set.

use std::io;
use std::path::PathBuf;

use image::imageops::FilterType;
use thiserror::Error;
use tracing::warn;

use super::{Tile, TileSet, TileSource};
use crate::config::TileSize;
use crate::coord;

/// Errors that can occur while listing tile files.
///
/// Per-entry failures (unparseable name, undecodable image) are not
/// represented here: they are logged and the entry is skipped.
#[derive(Debug, Error)]
pub enum TileStoreError {
    /// The tile directory could not be listed.
    #[error("failed to read tile directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads every usable tile from a source, normalized to `tile_size`.
///
/// For each entry the name stem is decoded into a grid position, the bytes
/// are decoded as an image and the image is resized to exactly
/// `tile_size` with bilinear resampling. Entries that fail any of those
/// steps are logged and excluded; the load continues.
///
/// An empty result is a valid terminal condition, not an error - check
/// [`TileSet::is_empty`] before computing an extent over it.
///
/// # Errors
///
/// Only a failure to enumerate the source at all is an error.
pub fn load_tiles<S: TileSource>(source: &S, tile_size: TileSize) -> Result<TileSet, TileStoreError> {
    let mut tiles = TileSet::new();

    for entry in source.entries()? {
        let coord = match coord::parse_stem(&entry.stem) {
            Ok(coord) => coord,
            Err(e) => {
                warn!(stem = %entry.stem, error = %e, "skipping tile with unrecognized name");
                continue;
            }
        };

        let decoded = match image::load_from_memory(&entry.bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(stem = %entry.stem, error = %e, "skipping undecodable tile");
                continue;
            }
        };

        let image = decoded
            .resize_exact(tile_size.width(), tile_size.height(), FilterType::Triangle)
            .to_rgb8();
        tiles.push(Tile { coord, image });
    }

    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{Rgb, RgbImage};

    use super::*;
    use crate::coord::TileCoord;
    use crate::tile::TileEntry;

    /// In-memory tile source.
    struct MemTileSource {
        entries: Vec<TileEntry>,
    }

    impl TileSource for MemTileSource {
        fn entries(&self) -> Result<Vec<TileEntry>, TileStoreError> {
            Ok(self.entries.clone())
        }
    }

    fn png_bytes(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, color);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png)
            .expect("encoding a fresh image cannot fail");
        buf.into_inner()
    }

    fn entry(stem: &str, bytes: Vec<u8>) -> TileEntry {
        TileEntry {
            stem: stem.to_string(),
            bytes,
        }
    }

    fn size(width: u32, height: u32) -> TileSize {
        TileSize::new(width, height).unwrap()
    }

    #[test]
    fn test_loads_valid_tiles_with_positions() {
        let source = MemTileSource {
            entries: vec![
                entry("1s1e", png_bytes(4, 4, Rgb([255, 0, 0]))),
                entry("1n1e", png_bytes(4, 4, Rgb([0, 0, 255]))),
            ],
        };

        let tiles = load_tiles(&source, size(4, 4)).unwrap();

        assert_eq!(tiles.len(), 2);
        let coords: Vec<TileCoord> = tiles.iter().map(|t| t.coord).collect();
        assert!(coords.contains(&TileCoord { x: 0, y: 0 }));
        assert!(coords.contains(&TileCoord { x: 0, y: -1 }));
    }

    #[test]
    fn test_malformed_name_is_skipped_not_fatal() {
        let source = MemTileSource {
            entries: vec![
                entry("1s1e", png_bytes(4, 4, Rgb([255, 0, 0]))),
                entry("not-a-tile", png_bytes(4, 4, Rgb([0, 255, 0]))),
            ],
        };

        let tiles = load_tiles(&source, size(4, 4)).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles.iter().next().unwrap().coord, TileCoord { x: 0, y: 0 });
    }

    #[test]
    fn test_undecodable_bytes_are_skipped_not_fatal() {
        let source = MemTileSource {
            entries: vec![
                entry("1s1e", b"definitely not a png".to_vec()),
                entry("1s2e", png_bytes(4, 4, Rgb([0, 255, 0]))),
            ],
        };

        let tiles = load_tiles(&source, size(4, 4)).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles.iter().next().unwrap().coord, TileCoord { x: 1, y: 0 });
    }

    #[test]
    fn test_every_tile_is_normalized_to_the_target_size() {
        let source = MemTileSource {
            entries: vec![
                entry("1s1e", png_bytes(16, 16, Rgb([10, 20, 30]))),
                entry("1s2e", png_bytes(3, 7, Rgb([10, 20, 30]))),
            ],
        };

        let tiles = load_tiles(&source, size(4, 4)).unwrap();

        assert_eq!(tiles.len(), 2);
        for tile in tiles.iter() {
            assert_eq!(tile.image.dimensions(), (4, 4));
        }
    }

    #[test]
    fn test_resize_preserves_uniform_color() {
        let source = MemTileSource {
            entries: vec![entry("1s1e", png_bytes(16, 16, Rgb([10, 20, 30])))],
        };

        let tiles = load_tiles(&source, size(4, 4)).unwrap();
        let tile = tiles.iter().next().unwrap();
        assert_eq!(*tile.image.get_pixel(0, 0), Rgb([10, 20, 30]));
        assert_eq!(*tile.image.get_pixel(3, 3), Rgb([10, 20, 30]));
    }

    #[test]
    fn test_empty_source_yields_empty_set() {
        let source = MemTileSource { entries: vec![] };
        let tiles = load_tiles(&source, size(4, 4)).unwrap();
        assert!(tiles.is_empty());
    }
}
