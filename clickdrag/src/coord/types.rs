//! Coordinate type definitions

use std::fmt;

/// Latitude hemisphere of a tile name: `n` or `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatBand {
    North,
    South,
}

impl LatBand {
    /// Returns the single-character code used in tile names.
    pub fn as_char(&self) -> char {
        match self {
            LatBand::North => 'n',
            LatBand::South => 's',
        }
    }
}

/// Longitude hemisphere of a tile name: `e` or `w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LonBand {
    East,
    West,
}

impl LonBand {
    /// Returns the single-character code used in tile names.
    pub fn as_char(&self) -> char {
        match self {
            LonBand::East => 'e',
            LonBand::West => 'w',
        }
    }
}

/// Signed grid position of a tile.
///
/// The comic's tiles are addressed on a conceptual infinite 2D grid.
/// `x` grows eastward, `y` grows southward; the origin tile `1s1e` sits
/// at `(0, 0)` and every northern tile has `y < 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Column (east-west). `e` names map to `x >= 0`, `w` names to `x < 0`.
    pub x: i32,
    /// Row (north-south). `n` names map to `y < 0`, `s` names to `y >= 0`.
    pub y: i32,
}

impl TileCoord {
    /// Converts a 1-based hemisphere index pair into a grid position.
    ///
    /// The tile naming scheme is 1-indexed per hemisphere (there is no
    /// "tile 0"), so mapping onto a zero-origin signed grid shifts
    /// asymmetrically: `1s` is row 0, `1n` is row -1, `1e` is column 0,
    /// `1w` is column -1.
    ///
    /// # Errors
    ///
    /// Returns `CoordError::MalformedStem` if either index is zero or does
    /// not fit the signed grid.
    pub fn from_hemisphere(
        lat: u32,
        lat_band: LatBand,
        lon: u32,
        lon_band: LonBand,
    ) -> Result<Self, CoordError> {
        let malformed = || {
            CoordError::MalformedStem(format!(
                "{}{}{}{}",
                lat,
                lat_band.as_char(),
                lon,
                lon_band.as_char()
            ))
        };

        if lat == 0 || lon == 0 || lat > i32::MAX as u32 || lon > i32::MAX as u32 {
            return Err(malformed());
        }

        let y = match lat_band {
            LatBand::North => -(lat as i32),
            LatBand::South => lat as i32 - 1,
        };
        let x = match lon_band {
            LonBand::East => lon as i32 - 1,
            LonBand::West => -(lon as i32),
        };

        Ok(TileCoord { x, y })
    }

    /// Encodes this position back into a tile name stem, e.g. `"3n12e"`.
    ///
    /// This is the exact inverse of [`parse_stem`](crate::coord::parse_stem).
    pub fn stem(&self) -> String {
        let (lat, ns) = if self.y < 0 {
            (-(self.y as i64), 'n')
        } else {
            (self.y as i64 + 1, 's')
        };
        let (lon, ew) = if self.x >= 0 {
            (self.x as i64 + 1, 'e')
        } else {
            (-(self.x as i64), 'w')
        };
        format!("{lat}{ns}{lon}{ew}")
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors that can occur while decoding tile names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Name stem does not encode a grid position
    MalformedStem(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::MalformedStem(stem) => {
                write!(f, "tile name '{}' does not encode a grid position", stem)
            }
        }
    }
}

impl std::error::Error for CoordError {}
