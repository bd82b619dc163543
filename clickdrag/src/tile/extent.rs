//! Bounding extent of a tile set.

use std::fmt;
use std::ops::RangeInclusive;

use super::TileSet;

/// The minimal bounding rectangle, in grid coordinates, covering all
/// known tiles.
///
/// Derived from the current tile set; recompute after the set changes.
/// `min_x <= max_x` and `min_y <= max_y` hold whenever the set is
/// non-empty; an empty set has no extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtent {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

/// Error computing an extent over an empty tile set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySetError;

impl fmt::Display for EmptySetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot compute a grid extent over an empty tile set")
    }
}

impl std::error::Error for EmptySetError {}

impl GridExtent {
    /// Computes the bounding extent of a tile set in a single pass.
    ///
    /// # Errors
    ///
    /// Returns `EmptySetError` if the set holds no tiles. Callers are
    /// expected to have checked [`TileSet::is_empty`] already.
    pub fn of(tiles: &TileSet) -> Result<Self, EmptySetError> {
        let mut iter = tiles.iter();
        let first = iter.next().ok_or(EmptySetError)?;

        let mut extent = GridExtent {
            min_x: first.coord.x,
            max_x: first.coord.x,
            min_y: first.coord.y,
            max_y: first.coord.y,
        };
        for tile in iter {
            extent.min_x = extent.min_x.min(tile.coord.x);
            extent.max_x = extent.max_x.max(tile.coord.x);
            extent.min_y = extent.min_y.min(tile.coord.y);
            extent.max_y = extent.max_y.max(tile.coord.y);
        }
        Ok(extent)
    }

    /// Number of grid columns the extent spans.
    pub fn cols(&self) -> u32 {
        (self.max_x as i64 - self.min_x as i64 + 1) as u32
    }

    /// Number of grid rows the extent spans.
    pub fn rows(&self) -> u32 {
        (self.max_y as i64 - self.min_y as i64 + 1) as u32
    }

    /// Grid rows covered by the extent, north to south.
    pub fn row_range(&self) -> RangeInclusive<i32> {
        self.min_y..=self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::TileCoord;
    use crate::tile::Tile;
    use image::RgbImage;

    fn set_of(coords: &[(i32, i32)]) -> TileSet {
        let mut set = TileSet::new();
        for &(x, y) in coords {
            set.push(Tile {
                coord: TileCoord { x, y },
                image: RgbImage::new(1, 1),
            });
        }
        set
    }

    #[test]
    fn test_single_tile_extent_is_degenerate() {
        let extent = GridExtent::of(&set_of(&[(3, -2)])).unwrap();
        assert_eq!(
            extent,
            GridExtent {
                min_x: 3,
                max_x: 3,
                min_y: -2,
                max_y: -2
            }
        );
        assert_eq!(extent.cols(), 1);
        assert_eq!(extent.rows(), 1);
    }

    #[test]
    fn test_extent_over_mixed_quadrants() {
        let extent = GridExtent::of(&set_of(&[(-33, -9), (47, -1), (0, 4), (-2, 0)])).unwrap();
        assert_eq!(
            extent,
            GridExtent {
                min_x: -33,
                max_x: 47,
                min_y: -9,
                max_y: 4
            }
        );
        assert_eq!(extent.cols(), 81);
        assert_eq!(extent.rows(), 14);
    }

    #[test]
    fn test_empty_set_has_no_extent() {
        let result = GridExtent::of(&TileSet::new());
        assert_eq!(result, Err(EmptySetError));
    }

    #[test]
    fn test_row_range_walks_north_to_south() {
        let extent = GridExtent::of(&set_of(&[(0, -1), (0, 1)])).unwrap();
        let rows: Vec<i32> = extent.row_range().collect();
        assert_eq!(rows, vec![-1, 0, 1]);
    }
}
