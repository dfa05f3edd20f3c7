//! Read-only access to the two iBooks databases.
//!
//! # Schema
//!
//! - library store, `ZBKLIBRARYASSET`: one row per owned book
//!   (`ZASSETID`, `ZTITLE`, `ZAUTHOR`)
//! - annotations store, `ZAEANNOTATION`: one row per highlight or note, keyed
//!   to a book by `ZANNOTATIONASSETID` and positioned by
//!   `ZPLLOCATIONRANGESTART`; `ZFUTUREPROOFING5` carries the chapter label
//!
//! # Key Functions
//!
//! - [`Repository::open`]: Open both stores read-only
//! - [`Repository::list_assets`] / [`Repository::asset_index`]: The catalog
//! - [`Repository::count_highlighted_assets`]: Highlight counts per book
//! - [`Repository::list_annotations`]: All annotations in reading order

use crate::model::{Annotation, Asset};
use rusqlite::{Connection, OpenFlags};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::Duration;

const ASSETS_SQL: &str = r#"
SELECT ZASSETID,
       COALESCE(ZTITLE, ''),
       COALESCE(ZAUTHOR, '')
FROM ZBKLIBRARYASSET
WHERE ZASSETID IS NOT NULL
ORDER BY rowid;
"#;

const COUNTS_SQL: &str = r#"
SELECT ZANNOTATIONASSETID, COUNT(*)
FROM ZAEANNOTATION
WHERE ZANNOTATIONREPRESENTATIVETEXT IS NOT NULL
GROUP BY ZANNOTATIONASSETID;
"#;

const ANNOTATIONS_SQL: &str = r#"
SELECT ZANNOTATIONASSETID,
       ZANNOTATIONREPRESENTATIVETEXT,
       ZANNOTATIONSELECTEDTEXT,
       COALESCE(ZANNOTATIONSTYLE, 0),
       ZFUTUREPROOFING5
FROM ZAEANNOTATION
WHERE ZANNOTATIONASSETID IS NOT NULL
ORDER BY ZANNOTATIONASSETID, ZPLLOCATIONRANGESTART, rowid;
"#;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    #[error("sqlite error: {source}")]
    Sqlite { source: rusqlite::Error },
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(source: rusqlite::Error) -> Self {
        Self::Sqlite { source }
    }
}

/// Both stores, held open for the lifetime of one export run.
pub struct Repository {
    annotations: Connection,
    library: Connection,
}

impl Repository {
    pub fn open(annotations_path: &Path, library_path: &Path) -> Result<Self, RepositoryError> {
        let annotations = open_read_only(annotations_path)?;
        let library = open_read_only(library_path)?;
        Ok(Self::from_connections(annotations, library))
    }

    pub fn from_connections(annotations: Connection, library: Connection) -> Self {
        Self {
            annotations,
            library,
        }
    }

    /// Every catalog entry, whether or not it has highlights.
    pub fn list_assets(&self) -> Result<Vec<Asset>, RepositoryError> {
        let mut stmt = self.library.prepare(ASSETS_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok(Asset {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
            })
        })?;

        let mut assets = Vec::new();
        for row in rows {
            assets.push(row?);
        }
        tracing::debug!(count = assets.len(), "loaded catalog");
        Ok(assets)
    }

    pub fn asset_index(&self) -> Result<HashMap<String, Asset>, RepositoryError> {
        let assets = self.list_assets()?;
        Ok(assets
            .into_iter()
            .map(|asset| (asset.id.clone(), asset))
            .collect())
    }

    /// Number of annotations with representative text, per asset id.
    pub fn count_highlighted_assets(&self) -> Result<BTreeMap<String, i64>, RepositoryError> {
        let mut stmt = self.annotations.prepare(COUNTS_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, Option<String>>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut counts = BTreeMap::new();
        for row in rows {
            let (asset_id, count) = row?;
            if let Some(asset_id) = asset_id {
                counts.insert(asset_id, count);
            }
        }
        Ok(counts)
    }

    /// All annotations ordered by asset, then by position within the asset.
    pub fn list_annotations(&self) -> Result<Vec<Annotation>, RepositoryError> {
        let mut stmt = self.annotations.prepare(ANNOTATIONS_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok(Annotation {
                asset_id: row.get(0)?,
                representative_text: row.get(1)?,
                selected_text: row.get(2)?,
                style: row.get(3)?,
                chapter_label: row.get(4)?,
            })
        })?;

        let mut annotations = Vec::new();
        for row in rows {
            annotations.push(row?);
        }
        tracing::debug!(count = annotations.len(), "loaded annotations");
        Ok(annotations)
    }
}

/// Chapter label of the first row of an annotation listing.
pub fn chapter_label_of(annotations: &[Annotation]) -> Option<&str> {
    annotations
        .first()
        .and_then(|annotation| annotation.chapter_label.as_deref())
}

fn open_read_only(path: &Path) -> Result<Connection, RepositoryError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(|source| RepositoryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Configure a store connection for reading alongside a running iBooks.
///
/// - busy_timeout=5000ms: wait out the app's own writes instead of failing
/// - query_only: refuse any statement that would modify the store
pub fn configure_connection(conn: &Connection) -> Result<(), RepositoryError> {
    conn.busy_timeout(Duration::from_millis(5000))?;
    conn.pragma_update(None, "query_only", true)?;
    Ok(())
}
