//! Locating the annotation and library databases on disk.
//!
//! Each store lives as a single `*.sqlite` file directly under a fixed
//! container directory. Only the top level is searched; sidecar files such as
//! `-wal` and `-shm` never match the extension check.

use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const ANNOTATIONS_DIR: &str = "~/Library/Containers/com.apple.iBooksX/Data/Documents/AEAnnotation/";
pub const LIBRARY_DIR: &str = "~/Library/Containers/com.apple.iBooksX/Data/Documents/BKLibrary/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Annotations,
    Library,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Annotations => f.write_str("annotations"),
            Self::Library => f.write_str("assets"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("couldn't find the iBooks {kind} database in {}", dir.display())]
    MissingStore { kind: StoreKind, dir: PathBuf },
    #[error("walk error: {source}")]
    Walk { source: walkdir::Error },
}

impl From<walkdir::Error> for DiscoverError {
    fn from(source: walkdir::Error) -> Self {
        Self::Walk { source }
    }
}

/// Returns the first `*.sqlite` file under `dir`, by file name order.
///
/// A directory that does not exist is reported as a missing store rather than
/// an I/O failure.
pub fn locate_store(kind: StoreKind, dir: &Path) -> Result<PathBuf, DiscoverError> {
    let missing = || DiscoverError::MissingStore {
        kind,
        dir: dir.to_path_buf(),
    };

    if !dir.is_dir() {
        return Err(missing());
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_sqlite = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == "sqlite")
            .unwrap_or(false);
        if is_sqlite {
            tracing::info!(%kind, path = %entry.path().display(), "found store");
            return Ok(entry.into_path());
        }
    }

    Err(missing())
}
