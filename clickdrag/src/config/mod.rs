//! Run configuration
//!
//! Everything a fetch or combine run needs is threaded through an explicit
//! [`StitchConfig`] value rather than module-level constants: the image
//! directory, the normalized tile size and the combine mode.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::compose::CombineMode;

/// Upper bound for each tile dimension.
pub const MAX_TILE_DIM: u32 = 2048;

/// Default directory tiles are saved to and read from.
pub const DEFAULT_IMAGE_DIR: &str = "/images";

/// Default number of grid rows per grouped output image.
pub const DEFAULT_ROWS_PER_IMAGE: u32 = 3;

/// Errors that can occur while building a configuration.
///
/// These are the only fatal errors in the system: they abort the run
/// before any fetch or combine work starts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Size string is not of the form `<width>x<height>`.
    #[error("invalid size '{0}' - expected a format like '2048x2048'")]
    MalformedSize(String),
    /// Dimensions are outside the supported range.
    #[error("tile size {width}x{height} is out of range - both dimensions must be within 1..={max}", max = MAX_TILE_DIM)]
    InvalidTileSize { width: u32, height: u32 },
    /// Grouped output batches must hold at least one row.
    #[error("rows per image must be at least 1")]
    InvalidRowsPerImage,
}

/// Normalized tile dimensions, validated to `1..=2048` per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    width: u32,
    height: u32,
}

impl TileSize {
    /// Creates a validated tile size.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTileSize` if either dimension is zero
    /// or exceeds [`MAX_TILE_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || width > MAX_TILE_DIM || height > MAX_TILE_DIM {
            return Err(ConfigError::InvalidTileSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Default size for row and grouped-row outputs.
    pub fn stitch_default() -> Self {
        Self {
            width: 2048,
            height: 2048,
        }
    }

    /// Default size for the single full-grid overview.
    pub fn overview_default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }

    /// Tile width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tile height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TileSize {
    type Err = ConfigError;

    /// Parses a `<width>x<height>` string, e.g. `"2048x2048"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedSize(s.to_string());

        let (width, height) = s.trim().split_once('x').ok_or_else(malformed)?;
        let width: u32 = width.trim().parse().map_err(|_| malformed())?;
        let height: u32 = height.trim().parse().map_err(|_| malformed())?;

        Self::new(width, height)
    }
}

/// Configuration for a combine run.
#[derive(Debug, Clone)]
pub struct StitchConfig {
    /// Directory holding the downloaded tiles.
    pub image_dir: PathBuf,
    /// Size every tile is normalized to before composition.
    pub tile_size: TileSize,
    /// Output granularity.
    pub mode: CombineMode,
}

impl StitchConfig {
    /// Creates a config with the default tile size and grouped-row mode.
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            tile_size: TileSize::stitch_default(),
            mode: CombineMode::GroupedRows {
                rows_per_image: DEFAULT_ROWS_PER_IMAGE,
            },
        }
    }

    /// Sets the tile size.
    pub fn with_tile_size(mut self, tile_size: TileSize) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Sets the combine mode.
    pub fn with_mode(mut self, mode: CombineMode) -> Self {
        self.mode = mode;
        self
    }

    /// Directory composite outputs are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.image_dir.join("output")
    }
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_DIR)
    }
}
