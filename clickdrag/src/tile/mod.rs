//! Tile records and loading
//!
//! A [`Tile`] is one decoded, normalized image positioned on the signed
//! grid. The [`TileSource`] trait abstracts where the raw files come from
//! (a directory in production, memory in tests) and [`load_tiles`] turns a
//! source into a [`TileSet`], skipping anything it cannot use.

mod extent;
mod source;
mod store;

pub use extent::{EmptySetError, GridExtent};
pub use source::{DirTileSource, TileEntry, TileSource};
pub use store::{load_tiles, TileStoreError};

use image::RgbImage;

use crate::coord::TileCoord;

/// One decoded tile positioned on the grid.
///
/// The image has already been normalized to the configured tile size by
/// the load path; compositors rely on that.
#[derive(Debug, Clone)]
pub struct Tile {
    /// Grid position decoded from the file name.
    pub coord: TileCoord,
    /// Decoded and resized pixel data.
    pub image: RgbImage,
}

/// The tiles loaded for one run.
///
/// Built once from directory contents and read-only afterwards. Grid
/// positions are not required to be unique, though in practice each
/// position appears once.
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tile.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Number of tiles in the set.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set holds no tiles.
    ///
    /// An empty set is a valid terminal condition, not an error; callers
    /// must check it before computing an extent.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterates over all tiles.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Iterates over the tiles of one grid row.
    pub fn row(&self, y: i32) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |tile| tile.coord.y == y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_at(x: i32, y: i32) -> Tile {
        Tile {
            coord: TileCoord { x, y },
            image: RgbImage::new(1, 1),
        }
    }

    #[test]
    fn test_new_set_is_empty() {
        let set = TileSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_push_and_iterate() {
        let mut set = TileSet::new();
        set.push(tile_at(0, 0));
        set.push(tile_at(1, 0));

        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_row_filters_by_grid_row() {
        let mut set = TileSet::new();
        set.push(tile_at(0, -1));
        set.push(tile_at(1, 0));
        set.push(tile_at(2, 0));

        assert_eq!(set.row(0).count(), 2);
        assert_eq!(set.row(-1).count(), 1);
        assert_eq!(set.row(5).count(), 0);
    }
}
