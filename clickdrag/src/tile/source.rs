//! Directory-listing capability for tile loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::TileStoreError;

/// One raw tile file: its name stem and undecoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileEntry {
    /// File name without extension, e.g. `"3n12e"`.
    pub stem: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Trait for enumerating raw tile files.
///
/// This abstraction allows for dependency injection and easier testing:
/// production loads from a directory, tests from memory.
pub trait TileSource {
    /// Lists every candidate tile entry.
    ///
    /// Implementations decide what counts as a candidate (e.g. extension
    /// filtering); per-entry read failures should be logged and skipped,
    /// not surfaced.
    fn entries(&self) -> Result<Vec<TileEntry>, TileStoreError>;
}

/// Tile source reading `*.png` files from a single directory.
///
/// The listing is non-recursive. Files that cannot be read are logged and
/// skipped; only failing to list the directory itself is an error.
#[derive(Debug, Clone)]
pub struct DirTileSource {
    dir: PathBuf,
}

impl DirTileSource {
    /// Creates a source over the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this source reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TileSource for DirTileSource {
    fn entries(&self) -> Result<Vec<TileEntry>, TileStoreError> {
        let listing = fs::read_dir(&self.dir).map_err(|source| TileStoreError::DirectoryRead {
            path: self.dir.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for item in listing {
            let item = match item {
                Ok(item) => item,
                Err(e) => {
                    warn!(directory = %self.dir.display(), error = %e, "unreadable directory entry, skipping");
                    continue;
                }
            };

            let path = item.path();
            let is_png = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if !is_png {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match fs::read(&path) {
                Ok(bytes) => entries.push(TileEntry {
                    stem: stem.to_string(),
                    bytes,
                }),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read tile file, skipping");
                }
            }
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_only_png_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1s1e.png"), b"png bytes").unwrap();
        fs::write(dir.path().join("2s1e.PNG"), b"png bytes").unwrap();
        fs::write(dir.path().join("notes.txt"), b"not a tile").unwrap();
        fs::write(dir.path().join("no_extension"), b"not a tile").unwrap();

        let source = DirTileSource::new(dir.path());
        let mut stems: Vec<String> = source
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.stem)
            .collect();
        stems.sort();

        assert_eq!(stems, vec!["1s1e".to_string(), "2s1e".to_string()]);
    }

    #[test]
    fn test_subdirectories_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("output")).unwrap();
        fs::write(dir.path().join("2n1w.png"), b"png bytes").unwrap();

        let source = DirTileSource::new(dir.path());
        let entries = source.entries().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].stem, "2n1w");
        assert_eq!(entries[0].bytes, b"png bytes");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirTileSource::new(dir.path().join("does-not-exist"));

        let result = source.entries();
        assert!(matches!(
            result,
            Err(TileStoreError::DirectoryRead { .. })
        ));
    }

    #[test]
    fn test_empty_directory_yields_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirTileSource::new(dir.path());
        assert!(source.entries().unwrap().is_empty());
    }
}
