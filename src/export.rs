//! One export run: locate the stores, read them, then either list the
//! catalog or render and write a report.

use crate::aggregate::{AggregateError, group_books, select_book};
use crate::discover::{DiscoverError, StoreKind, locate_store};
use crate::render::{RenderError, RenderOptions, ReportFormat, render};
use crate::repository::{Repository, RepositoryError};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub enum ExportAction {
    /// Print the catalog instead of writing a report.
    List { json: bool },
    Report {
        output: PathBuf,
        format: ReportFormat,
        book: Option<String>,
        disable_toc: bool,
        disable_style_framework: bool,
    },
}

#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub annotations_dir: PathBuf,
    pub library_dir: PathBuf,
    pub action: ExportAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Listed { assets: usize },
    Written { path: PathBuf, books: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("{source}")]
    Discover { source: DiscoverError },
    #[error("repository error: {source}")]
    Repository { source: RepositoryError },
    #[error("{source}")]
    Aggregate { source: AggregateError },
    #[error("render error: {source}")]
    Render { source: RenderError },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("io error: {source}")]
    Io { source: std::io::Error },
    #[error("json error: {source}")]
    Json { source: serde_json::Error },
}

impl From<DiscoverError> for ExportError {
    fn from(source: DiscoverError) -> Self {
        Self::Discover { source }
    }
}

impl From<AggregateError> for ExportError {
    fn from(source: AggregateError) -> Self {
        Self::Aggregate { source }
    }
}

impl From<RepositoryError> for ExportError {
    fn from(source: RepositoryError) -> Self {
        Self::Repository { source }
    }
}

impl From<RenderError> for ExportError {
    fn from(source: RenderError) -> Self {
        Self::Render { source }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

/// Runs a whole export. Listings go to `stdout`; reports go to the requested
/// file, which is only created once rendering has succeeded.
pub fn run<W: Write>(request: &ExportRequest, stdout: &mut W) -> Result<ExportOutcome, ExportError> {
    let annotations_path = locate_store(StoreKind::Annotations, &request.annotations_dir)?;
    let library_path = locate_store(StoreKind::Library, &request.library_dir)?;
    let repo = Repository::open(&annotations_path, &library_path)?;

    match &request.action {
        ExportAction::List { json } => list_catalog(&repo, *json, stdout),
        ExportAction::Report {
            output,
            format,
            book,
            disable_toc,
            disable_style_framework,
        } => {
            let options = RenderOptions {
                disable_toc: *disable_toc,
                disable_style_framework: *disable_style_framework,
                date: today(),
            };
            write_report(&repo, output, *format, book.as_deref(), &options)
        }
    }
}

/// Prints every catalog asset as `asset_id title author`, one per line.
pub fn list_catalog<W: Write>(
    repo: &Repository,
    json: bool,
    out: &mut W,
) -> Result<ExportOutcome, ExportError> {
    let assets = repo.list_assets()?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&assets)?)?;
    } else {
        for asset in &assets {
            writeln!(out, "{} {} {}", asset.id, asset.title, asset.author)?;
        }
    }
    Ok(ExportOutcome::Listed {
        assets: assets.len(),
    })
}

pub fn write_report(
    repo: &Repository,
    output: &Path,
    format: ReportFormat,
    book: Option<&str>,
    options: &RenderOptions,
) -> Result<ExportOutcome, ExportError> {
    let assets = repo.asset_index()?;
    let mut books = group_books(repo.list_annotations()?, &assets)?;
    if let Some(name) = book {
        books = vec![select_book(books, name)?];
    }

    let rendered = render(&books, format, options)?;
    std::fs::write(output, rendered).map_err(|source| ExportError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %output.display(), books = books.len(), "wrote report");

    Ok(ExportOutcome::Written {
        path: output.to_path_buf(),
        books: books.len(),
    })
}

/// Today's date as `YYYY-MM-DD` in the local timezone.
///
/// Falls back to UTC when the local offset cannot be determined, which the
/// `time` crate reports on multi-threaded Unix processes.
fn today() -> String {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_iso_date() {
        let date = today();
        let bytes = date.as_bytes();
        assert_eq!(date.len(), 10, "{date}");
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert!(
            date.chars()
                .enumerate()
                .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
        );
    }
}
