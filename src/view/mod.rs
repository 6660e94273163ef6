//! Display adapters over the file tree and tracker list

pub mod files;
pub mod trackers;

pub use files::{FileTreeEntry, FilesModel};
pub use trackers::{TrackerRow, TrackerTier, TrackersModel};
