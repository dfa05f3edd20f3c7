#![allow(dead_code)]

use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};

pub struct Row<'a> {
    pub asset_id: &'a str,
    pub representative: Option<&'a str>,
    pub selected: Option<&'a str>,
    pub style: i64,
    pub chapter: Option<&'a str>,
    pub location: i64,
}

pub fn row<'a>(asset_id: &'a str, representative: &'a str, selected: &'a str, location: i64) -> Row<'a> {
    Row {
        asset_id,
        representative: Some(representative),
        selected: Some(selected),
        style: 3,
        chapter: None,
        location,
    }
}

/// Writes `BKLibrary/BKLibrary-1-091020131601.sqlite` under `root`.
pub fn library_store(root: &Path, assets: &[(&str, &str, &str)]) -> PathBuf {
    let dir = root.join("BKLibrary");
    std::fs::create_dir_all(&dir).expect("library dir");
    let path = dir.join("BKLibrary-1-091020131601.sqlite");

    let conn = Connection::open(&path).expect("open library");
    conn.execute_batch(
        "CREATE TABLE ZBKLIBRARYASSET (
            Z_PK INTEGER PRIMARY KEY,
            ZASSETID VARCHAR,
            ZTITLE VARCHAR,
            ZAUTHOR VARCHAR
        );",
    )
    .expect("library schema");
    for (id, title, author) in assets {
        conn.execute(
            "INSERT INTO ZBKLIBRARYASSET (ZASSETID, ZTITLE, ZAUTHOR) VALUES (?1, ?2, ?3)",
            params![id, title, author],
        )
        .expect("insert asset");
    }
    dir
}

/// Writes `AEAnnotation/AEAnnotation_v10312011_1727_local.sqlite` under `root`.
pub fn annotation_store(root: &Path, rows: &[Row<'_>]) -> PathBuf {
    let dir = root.join("AEAnnotation");
    std::fs::create_dir_all(&dir).expect("annotation dir");
    let path = dir.join("AEAnnotation_v10312011_1727_local.sqlite");

    let conn = Connection::open(&path).expect("open annotations");
    conn.execute_batch(
        "CREATE TABLE ZAEANNOTATION (
            Z_PK INTEGER PRIMARY KEY,
            ZANNOTATIONASSETID VARCHAR,
            ZANNOTATIONREPRESENTATIVETEXT VARCHAR,
            ZANNOTATIONSELECTEDTEXT VARCHAR,
            ZANNOTATIONSTYLE INTEGER,
            ZFUTUREPROOFING5 VARCHAR,
            ZPLLOCATIONRANGESTART INTEGER
        );",
    )
    .expect("annotation schema");
    for row in rows {
        conn.execute(
            "INSERT INTO ZAEANNOTATION (
                ZANNOTATIONASSETID,
                ZANNOTATIONREPRESENTATIVETEXT,
                ZANNOTATIONSELECTEDTEXT,
                ZANNOTATIONSTYLE,
                ZFUTUREPROOFING5,
                ZPLLOCATIONRANGESTART
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                row.asset_id,
                row.representative,
                row.selected,
                row.style,
                row.chapter,
                row.location,
            ],
        )
        .expect("insert annotation");
    }
    dir
}
