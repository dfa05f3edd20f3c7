//! ibooks-highlights - iBooks highlight exporter
//!
//! Reads highlights and notes from the iBooks annotation and library SQLite
//! stores and renders them as an HTML report or a SimpleMind mind map.

// Safety lints
#![deny(unsafe_code)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Panic prevention - warn in library code
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]

// Code quality
#![warn(clippy::cognitive_complexity)]
#![warn(clippy::too_many_arguments)]
#![warn(clippy::too_many_lines)]

pub mod aggregate;
pub mod discover;
pub mod export;
pub mod format;
pub mod model;
pub mod render;
pub mod repository;
pub mod util;
