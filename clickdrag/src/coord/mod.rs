//! Tile name coordinate codec
//!
//! The comic's tiles are published under names like `3n12e.png`: a 1-based
//! latitude index, a north/south hemisphere letter, a 1-based longitude
//! index and an east/west hemisphere letter. This module decodes those name
//! stems into signed grid positions and encodes positions back into stems.

mod types;

pub use types::{CoordError, LatBand, LonBand, TileCoord};

use std::sync::OnceLock;

use regex::Regex;

static STEM_PATTERN: OnceLock<Regex> = OnceLock::new();

fn stem_pattern() -> &'static Regex {
    STEM_PATTERN.get_or_init(|| Regex::new(r"^(\d+)([ns])(\d+)([ew])$").expect("valid pattern"))
}

/// Decodes a tile name stem into a grid position.
///
/// # Arguments
///
/// * `stem` - Name without extension, e.g. `"3n12e"`
///
/// # Returns
///
/// The signed grid position, or `CoordError::MalformedStem` if the stem
/// does not match the `<lat><n|s><lon><e|w>` pattern. Callers are expected
/// to treat that as "skip this file", never as fatal.
///
/// # Examples
///
/// ```
/// use clickdrag::coord::{parse_stem, TileCoord};
///
/// assert_eq!(parse_stem("1s1e").unwrap(), TileCoord { x: 0, y: 0 });
/// assert_eq!(parse_stem("3n12e").unwrap(), TileCoord { x: 11, y: -3 });
/// assert!(parse_stem("tile_3_12").is_err());
/// ```
pub fn parse_stem(stem: &str) -> Result<TileCoord, CoordError> {
    let malformed = || CoordError::MalformedStem(stem.to_string());

    let caps = stem_pattern().captures(stem).ok_or_else(malformed)?;

    let lat: u32 = caps[1].parse().map_err(|_| malformed())?;
    let lon: u32 = caps[3].parse().map_err(|_| malformed())?;
    let lat_band = match &caps[2] {
        "n" => LatBand::North,
        _ => LatBand::South,
    };
    let lon_band = match &caps[4] {
        "e" => LonBand::East,
        _ => LonBand::West,
    };

    TileCoord::from_hemisphere(lat, lat_band, lon, lon_band).map_err(|_| malformed())
}
