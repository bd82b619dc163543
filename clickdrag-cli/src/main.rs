//! Clickdrag CLI - Command-line interface
//!
//! This binary drives the clickdrag library: fetch the comic's tiles into
//! a directory, then stitch them into composite images.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};

use clickdrag::compose::CombineMode;
use clickdrag::config::{StitchConfig, TileSize, DEFAULT_IMAGE_DIR, DEFAULT_ROWS_PER_IMAGE};
use clickdrag::logging::init_logging;

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "clickdrag")]
#[command(about = "Download the xkcd \"Click and Drag\" tiles and stitch them together", long_about = None)]
#[command(version = clickdrag::VERSION)]
struct Args {
    /// Run the fetch process
    #[arg(short = 'f', long)]
    fetch: bool,

    /// Combine downloaded tiles into row-band images
    #[arg(short = 'c', long)]
    combine: bool,

    /// Combine every tile into a single overview image
    #[arg(short = 'C', long)]
    combine_all: bool,

    /// Run both the fetch and combine processes
    #[arg(short = 'a', long)]
    all: bool,

    /// Directory tiles are saved to and read from
    #[arg(short = 'd', long, default_value = DEFAULT_IMAGE_DIR)]
    directory: PathBuf,

    /// Tile size as <width>x<height> (default: 2048x2048, or 256x256 with --combine-all)
    #[arg(short = 's', long)]
    size: Option<String>,

    /// Grid rows per combined image; 1 writes one image per row
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_IMAGE)]
    rows: u32,
}

impl Args {
    fn wants_fetch(&self) -> bool {
        self.fetch || self.all
    }

    fn wants_combine(&self) -> bool {
        self.combine || self.all
    }

    fn wants_any_work(&self) -> bool {
        self.wants_fetch() || self.wants_combine() || self.combine_all
    }

    /// Tile size for this run: explicit `--size`, otherwise the mode default.
    fn tile_size(&self) -> Result<TileSize, CliError> {
        match &self.size {
            Some(s) => Ok(s.parse()?),
            None if self.combine_all => Ok(TileSize::overview_default()),
            None => Ok(TileSize::stitch_default()),
        }
    }

    /// Combine mode for this run.
    ///
    /// The overview takes precedence when both combine flags are given.
    fn combine_mode(&self) -> Result<CombineMode, CliError> {
        if self.combine_all {
            return Ok(CombineMode::FullGrid);
        }
        match self.rows {
            0 => Err(CliError::Config(
                clickdrag::config::ConfigError::InvalidRowsPerImage,
            )),
            1 => Ok(CombineMode::PerRow { max_rows: None }),
            rows => Ok(CombineMode::GroupedRows {
                rows_per_image: rows,
            }),
        }
    }
}

fn main() {
    let args = Args::parse();

    if !args.wants_any_work() {
        // Nothing requested: behave like --help and exit cleanly.
        let _ = Args::command().print_help();
        return;
    }

    init_logging();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    // Configuration problems are the only fatal errors; surface them
    // before any fetch or combine work starts.
    let tile_size = args.tile_size()?;
    let mode = args.combine_mode()?;

    if args.wants_fetch() {
        commands::fetch::run(&args.directory)?;
    }

    if args.combine_all || args.wants_combine() {
        let config = StitchConfig::new(&args.directory)
            .with_tile_size(tile_size)
            .with_mode(mode);
        commands::combine::run(&config)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_requests_no_work() {
        let args = Args::parse_from(["clickdrag"]);
        assert!(!args.wants_any_work());
    }

    #[test]
    fn test_all_implies_fetch_and_combine() {
        let args = Args::parse_from(["clickdrag", "-a"]);
        assert!(args.wants_fetch());
        assert!(args.wants_combine());
        assert!(!args.combine_all);
    }

    #[test]
    fn test_default_sizes_per_mode() {
        let combine = Args::parse_from(["clickdrag", "-c"]);
        assert_eq!(combine.tile_size().unwrap(), TileSize::stitch_default());

        let overview = Args::parse_from(["clickdrag", "-C"]);
        assert_eq!(overview.tile_size().unwrap(), TileSize::overview_default());
    }

    #[test]
    fn test_explicit_size_overrides_defaults() {
        let args = Args::parse_from(["clickdrag", "-C", "--size", "512x512"]);
        let size = args.tile_size().unwrap();
        assert_eq!(size.width(), 512);
        assert_eq!(size.height(), 512);
    }

    #[test]
    fn test_invalid_size_is_a_config_error() {
        let args = Args::parse_from(["clickdrag", "-c", "--size", "4096x4096"]);
        assert!(matches!(args.tile_size(), Err(CliError::Config(_))));

        let args = Args::parse_from(["clickdrag", "-c", "--size", "big"]);
        assert!(matches!(args.tile_size(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_rows_selects_the_combine_mode() {
        let grouped = Args::parse_from(["clickdrag", "-c"]);
        assert_eq!(
            grouped.combine_mode().unwrap(),
            CombineMode::GroupedRows { rows_per_image: 3 }
        );

        let per_row = Args::parse_from(["clickdrag", "-c", "--rows", "1"]);
        assert_eq!(
            per_row.combine_mode().unwrap(),
            CombineMode::PerRow { max_rows: None }
        );

        let zero = Args::parse_from(["clickdrag", "-c", "--rows", "0"]);
        assert!(matches!(zero.combine_mode(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_combine_all_takes_precedence() {
        let args = Args::parse_from(["clickdrag", "-c", "-C"]);
        assert_eq!(args.combine_mode().unwrap(), CombineMode::FullGrid);
    }

    #[test]
    fn test_directory_flag() {
        let args = Args::parse_from(["clickdrag", "-f", "-d", "/tmp/tiles"]);
        assert_eq!(args.directory, PathBuf::from("/tmp/tiles"));

        let default = Args::parse_from(["clickdrag", "-f"]);
        assert_eq!(default.directory, PathBuf::from(DEFAULT_IMAGE_DIR));
    }
}
