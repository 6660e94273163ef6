//! Torview: Torrent Metadata Viewer
//!
//! Turns decoded torrent metadata into a summary, a tracker list, and a file
//! tree with aggregated directory sizes, ordered directories-first for display.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod metainfo;
pub mod ordering;
pub mod tooling;
pub mod tree;
pub mod view;
