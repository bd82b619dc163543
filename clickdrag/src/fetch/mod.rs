//! Tile fetching
//!
//! Sweeps the comic's coordinate space quadrant by quadrant, downloading
//! each tile through a [`TileProvider`] and saving it under its name stem.
//! Tiles are independent of each other, so the sweep fans out across a
//! rayon thread pool. A tile that fails to download or save is logged and
//! skipped for the rest of the run; there are no retries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::coord::{LatBand, LonBand, TileCoord};
use crate::provider::TileProvider;

/// Errors that can occur while setting up a fetch run.
///
/// Per-tile failures are not represented here: they are logged and counted
/// in the [`FetchSummary`] instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The image directory could not be created.
    #[error("failed to create image directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A rectangular sweep of one hemisphere quadrant.
///
/// Enumerates every 1-based index pair `(lat, lon)` with
/// `lat <= lat_steps` and `lon <= lon_steps` in the given hemisphere pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantSweep {
    lat_band: LatBand,
    lon_band: LonBand,
    lat_steps: u32,
    lon_steps: u32,
}

impl QuadrantSweep {
    /// Creates a sweep covering `lat_steps x lon_steps` tiles of a quadrant.
    pub fn new(lat_band: LatBand, lon_band: LonBand, lat_steps: u32, lon_steps: u32) -> Self {
        Self {
            lat_band,
            lon_band,
            lat_steps,
            lon_steps,
        }
    }

    /// Number of tiles this sweep covers.
    pub fn tile_count(&self) -> usize {
        self.lat_steps as usize * self.lon_steps as usize
    }

    /// Grid positions of every tile in the sweep.
    pub fn coords(&self) -> Vec<TileCoord> {
        let mut coords = Vec::with_capacity(self.tile_count());
        for lat in 1..=self.lat_steps {
            for lon in 1..=self.lon_steps {
                let coord = TileCoord::from_hemisphere(lat, self.lat_band, lon, self.lon_band)
                    .expect("sweep indices are 1-based");
                coords.push(coord);
            }
        }
        coords
    }
}

/// The set of quadrant sweeps a fetch run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    sweeps: Vec<QuadrantSweep>,
}

impl FetchPlan {
    /// Creates a plan from explicit sweeps.
    pub fn new(sweeps: Vec<QuadrantSweep>) -> Self {
        Self { sweeps }
    }

    /// The published grid extents of xkcd #1110.
    ///
    /// The comic's map reaches 9 rows north, 5 rows south, 33 columns west
    /// and 48 columns east of the origin; the southern strip is narrower
    /// (17 west, 7 east).
    pub fn comic_1110() -> Self {
        Self::new(vec![
            QuadrantSweep::new(LatBand::North, LonBand::West, 9, 33),
            QuadrantSweep::new(LatBand::North, LonBand::East, 9, 48),
            QuadrantSweep::new(LatBand::South, LonBand::West, 5, 17),
            QuadrantSweep::new(LatBand::South, LonBand::East, 5, 7),
        ])
    }

    /// Number of tiles the whole plan covers.
    pub fn tile_count(&self) -> usize {
        self.sweeps.iter().map(QuadrantSweep::tile_count).sum()
    }

    /// Grid positions of every tile in the plan.
    pub fn coords(&self) -> Vec<TileCoord> {
        self.sweeps.iter().flat_map(QuadrantSweep::coords).collect()
    }
}

/// Counts of a finished fetch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchSummary {
    /// Tiles downloaded and saved.
    pub fetched: usize,
    /// Tiles skipped because of a download or save failure.
    pub skipped: usize,
}

/// Downloads tiles into an image directory.
pub struct Fetcher<P: TileProvider> {
    provider: P,
    image_dir: PathBuf,
}

impl<P: TileProvider> Fetcher<P> {
    /// Creates a fetcher saving into `image_dir`.
    pub fn new(provider: P, image_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            image_dir: image_dir.into(),
        }
    }

    /// Runs the plan, saving each tile as `<image_dir>/<stem>.png`.
    ///
    /// Per-tile failures (missing tile, network error, write error) are
    /// logged and counted as skipped; only failing to create the image
    /// directory itself is an error.
    pub fn run(&self, plan: &FetchPlan) -> Result<FetchSummary, FetchError> {
        fs::create_dir_all(&self.image_dir).map_err(|source| FetchError::CreateDir {
            path: self.image_dir.clone(),
            source,
        })?;

        let coords = plan.coords();
        info!(
            tiles = coords.len(),
            provider = self.provider.name(),
            directory = %self.image_dir.display(),
            "starting tile fetch"
        );

        let fetched = AtomicUsize::new(0);
        coords.par_iter().for_each(|&coord| {
            if self.fetch_one(coord) {
                fetched.fetch_add(1, Ordering::Relaxed);
            }
        });

        let fetched = fetched.into_inner();
        let summary = FetchSummary {
            fetched,
            skipped: coords.len() - fetched,
        };
        info!(
            fetched = summary.fetched,
            skipped = summary.skipped,
            "tile fetch finished"
        );
        Ok(summary)
    }

    /// Image directory this fetcher saves into.
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    fn fetch_one(&self, coord: TileCoord) -> bool {
        let stem = coord.stem();
        debug!(%stem, "fetching tile");

        let bytes = match self.provider.download_tile(coord) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(%stem, error = %e, "tile unavailable, skipping");
                return false;
            }
        };

        let path = self.image_dir.join(format!("{stem}.png"));
        if let Err(e) = fs::write(&path, &bytes) {
            warn!(path = %path.display(), error = %e, "failed to save tile, skipping");
            return false;
        }

        true
    }
}
