//! Joining annotations to catalog entries.
//!
//! # Key Functions
//!
//! - [`relevant_titles`]: Highlight counts per book, with title and author
//! - [`group_books`]: Consecutive annotations folded into [`HighlightedBook`]s
//! - [`select_book`]: Narrow the grouped books to one title
//!
//! An annotation whose asset is missing from the catalog (a book deleted from
//! the library while its highlights remain) aborts aggregation with
//! [`AggregateError::OrphanedAsset`].

use crate::model::{Annotation, Asset, HighlightedBook, TitleSummary};
use crate::repository::{Repository, RepositoryError};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("annotation references asset {asset_id}, which is not in the library")]
    OrphanedAsset { asset_id: String },
    #[error("no book with highlights matches {name:?}")]
    BookNotFound { name: String },
    #[error("{name:?} matches several books: {}", matches.join("; "))]
    AmbiguousBook { name: String, matches: Vec<String> },
    #[error("repository error: {source}")]
    Repository { source: RepositoryError },
}

impl From<RepositoryError> for AggregateError {
    fn from(source: RepositoryError) -> Self {
        Self::Repository { source }
    }
}

pub fn relevant_titles(
    repo: &Repository,
) -> Result<BTreeMap<String, TitleSummary>, AggregateError> {
    let counts = repo.count_highlighted_assets()?;
    let assets = repo.asset_index()?;
    summarize_counts(counts, &assets)
}

pub fn summarize_counts(
    counts: BTreeMap<String, i64>,
    assets: &HashMap<String, Asset>,
) -> Result<BTreeMap<String, TitleSummary>, AggregateError> {
    let mut titles = BTreeMap::new();
    for (asset_id, count) in counts {
        let Some(asset) = assets.get(&asset_id) else {
            return Err(AggregateError::OrphanedAsset { asset_id });
        };
        titles.insert(
            asset_id,
            TitleSummary {
                title: asset.title.clone(),
                author: asset.author.clone(),
                count,
            },
        );
    }
    Ok(titles)
}

/// Groups an ordered annotation stream into one entry per book.
///
/// Rows without representative text are dropped, as are books left with no
/// highlights. Input order is kept both across and within books.
pub fn group_books(
    annotations: Vec<Annotation>,
    assets: &HashMap<String, Asset>,
) -> Result<Vec<HighlightedBook>, AggregateError> {
    let mut books: Vec<HighlightedBook> = Vec::new();
    let mut skipped = 0usize;

    for annotation in annotations {
        if annotation.representative_text.is_none() {
            skipped += 1;
            continue;
        }

        let same_book = books
            .last()
            .map(|book| book.asset.id == annotation.asset_id)
            .unwrap_or(false);
        if !same_book {
            let Some(asset) = assets.get(&annotation.asset_id) else {
                return Err(AggregateError::OrphanedAsset {
                    asset_id: annotation.asset_id,
                });
            };
            books.push(HighlightedBook::new(asset.clone()));
        }

        if let Some(book) = books.last_mut() {
            book.push(annotation);
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped annotations without representative text");
    }
    Ok(books)
}

/// Picks the books whose title matches `name`, ignoring case.
///
/// An exact title wins over substring matches. Several substring matches are
/// ambiguous.
pub fn select_book(
    books: Vec<HighlightedBook>,
    name: &str,
) -> Result<HighlightedBook, AggregateError> {
    let needle = name.trim().to_lowercase();

    let mut exact = None;
    let mut partial = Vec::new();
    for book in books {
        let title = book.asset.title.to_lowercase();
        if title == needle {
            exact = Some(book);
            break;
        }
        if title.contains(&needle) {
            partial.push(book);
        }
    }

    if let Some(book) = exact {
        return Ok(book);
    }

    match partial.len() {
        0 => Err(AggregateError::BookNotFound {
            name: name.to_string(),
        }),
        1 => Ok(partial.remove(0)),
        _ => Err(AggregateError::AmbiguousBook {
            name: name.to_string(),
            matches: partial.into_iter().map(|book| book.asset.title).collect(),
        }),
    }
}
