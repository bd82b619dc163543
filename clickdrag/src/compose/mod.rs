//! Composite canvas assembly
//!
//! Lays the loaded tiles out onto output canvases according to their grid
//! position. Rows north of the origin sit on a light background, the
//! origin row and everything south of it on a dark one, so grid cells with
//! no tile stay visibly distinguished by hemisphere.
//!
//! Three output granularities share the same fill and placement rules:
//! one image per grid row, one image per band of rows, or a single image
//! spanning the whole grid. Rendering is separated from writing so the
//! pixel logic can be exercised without touching the filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{imageops, Rgb, RgbImage};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::TileSize;
use crate::tile::{EmptySetError, GridExtent, TileSet};

/// Background fill for rows north of the origin.
pub const NORTH_FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// Background fill for the origin row and rows south of it.
pub const SOUTH_FILL: Rgb<u8> = Rgb([0, 0, 0]);

/// Output granularity of a combine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombineMode {
    /// One output image per grid row, optionally capped to the first rows.
    PerRow { max_rows: Option<u32> },
    /// One output image per contiguous band of `rows_per_image` grid rows.
    GroupedRows { rows_per_image: u32 },
    /// A single output image spanning the whole grid.
    ///
    /// Intended for small tile sizes; at full tile resolution the canvas
    /// would be enormous.
    FullGrid,
}

/// Errors that can occur while setting up a combine run.
///
/// Per-output write failures are not represented here: they are logged
/// and counted in the [`ComposeSummary`] instead.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts of a finished combine run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComposeSummary {
    /// Output images written.
    pub written: usize,
    /// Output images that failed to encode or write.
    pub failed: usize,
}

/// Assembles composite images from a tile set.
///
/// Borrows the tile set read-only; every output canvas is constructed,
/// drawn and dropped independently.
pub struct Compositor<'a> {
    tiles: &'a TileSet,
    extent: GridExtent,
    tile_size: TileSize,
}

impl<'a> Compositor<'a> {
    /// Creates a compositor over a non-empty tile set.
    ///
    /// # Errors
    ///
    /// Returns `EmptySetError` if the set holds no tiles.
    pub fn new(tiles: &'a TileSet, tile_size: TileSize) -> Result<Self, EmptySetError> {
        let extent = GridExtent::of(tiles)?;
        Ok(Self {
            tiles,
            extent,
            tile_size,
        })
    }

    /// Bounding extent of the tile set being composed.
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Renders a band of `rows` grid rows starting at grid row `start_y`.
    ///
    /// The canvas spans the full column range of the extent. Each band row
    /// is filled with its hemisphere background before any tile is drawn,
    /// then every tile whose row falls inside the band is placed at
    /// `((x - min_x) * w, (y - start_y) * h)`.
    pub fn render_band(&self, start_y: i32, rows: u32) -> RgbImage {
        let w = self.tile_size.width();
        let h = self.tile_size.height();
        let width = self.extent.cols() * w;
        let height = rows * h;

        let mut canvas = RgbImage::from_fn(width, height, |_, py| {
            if start_y + ((py / h) as i32) < 0 {
                NORTH_FILL
            } else {
                SOUTH_FILL
            }
        });

        let band_end = start_y + rows as i32;
        for tile in self.tiles.iter() {
            let y = tile.coord.y;
            if y < start_y || y >= band_end {
                continue;
            }
            let px = (tile.coord.x - self.extent.min_x) as i64 * w as i64;
            let py = (y - start_y) as i64 * h as i64;
            imageops::replace(&mut canvas, &tile.image, px, py);
        }

        canvas
    }

    /// Renders a single grid row.
    pub fn render_row(&self, y: i32) -> RgbImage {
        self.render_band(y, 1)
    }

    /// Renders the whole grid as one canvas.
    pub fn render_full(&self) -> RgbImage {
        self.render_band(self.extent.min_y, self.extent.rows())
    }

    /// Renders and writes every output of the given mode into `output_dir`.
    ///
    /// Output files are `row_<n>.png`, `combined_rows_<n>.png` or
    /// `combine-all.png` depending on the mode. A canvas that fails to
    /// encode or write is logged and counted; the remaining outputs are
    /// still produced.
    ///
    /// # Errors
    ///
    /// Only a failure to create the output directory is an error.
    pub fn compose(
        &self,
        mode: &CombineMode,
        output_dir: &Path,
    ) -> Result<ComposeSummary, ComposeError> {
        fs::create_dir_all(output_dir).map_err(|source| ComposeError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut summary = ComposeSummary::default();
        match mode {
            CombineMode::PerRow { max_rows } => {
                let last = match max_rows {
                    Some(cap) => (self.extent.min_y + *cap as i32 - 1).min(self.extent.max_y),
                    None => self.extent.max_y,
                };
                for y in self.extent.min_y..=last {
                    // Shift by |min_y| so row indices sort without signs.
                    let name = format!("row_{}.png", y + self.extent.min_y.abs());
                    self.write_output(&self.render_row(y), output_dir, &name, &mut summary);
                }
            }
            CombineMode::GroupedRows { rows_per_image } => {
                let batch = (*rows_per_image).max(1);
                let bands = self.extent.rows().div_ceil(batch);
                for band in 0..bands {
                    let start = self.extent.min_y + (band * batch) as i32;
                    let rows = batch.min((self.extent.max_y - start) as u32 + 1);
                    let name = format!("combined_rows_{}.png", band + 1);
                    self.write_output(
                        &self.render_band(start, rows),
                        output_dir,
                        &name,
                        &mut summary,
                    );
                }
            }
            CombineMode::FullGrid => {
                self.write_output(&self.render_full(), output_dir, "combine-all.png", &mut summary);
            }
        }
        Ok(summary)
    }

    fn write_output(
        &self,
        canvas: &RgbImage,
        dir: &Path,
        name: &str,
        summary: &mut ComposeSummary,
    ) {
        let path = dir.join(name);
        match canvas.save(&path) {
            Ok(()) => {
                info!(path = %path.display(), "wrote composite image");
                summary.written += 1;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to write composite image, continuing");
                summary.failed += 1;
            }
        }
    }
}
