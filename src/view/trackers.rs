//! Tracker and web seed rows

use crate::format::format_section_heading;
use crate::metainfo::TorrentMetadata;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{CellAlignment, Table};
use std::fmt;

/// Tier column: announce tier, or a web seed marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerTier {
    Tier(u32),
    WebSeed,
}

impl fmt::Display for TrackerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerTier::Tier(tier) => write!(f, "{}", tier),
            TrackerTier::WebSeed => f.write_str("WEB"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerRow {
    pub tier: TrackerTier,
    pub url: String,
}

/// Trackers in announce order followed by web seeds.
#[derive(Debug, Clone, Default)]
pub struct TrackersModel {
    trackers: Vec<(u32, String)>,
    web_seeds: Vec<String>,
}

impl TrackersModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows with those of `metadata`.
    pub fn set_torrent_info(&mut self, metadata: &TorrentMetadata) {
        self.trackers.clear();
        self.web_seeds.clear();
        self.trackers
            .extend(metadata.trackers.iter().map(|t| (t.tier, t.url.clone())));
        self.web_seeds.extend(metadata.web_seeds.iter().cloned());
    }

    pub fn row_count(&self) -> usize {
        self.trackers.len() + self.web_seeds.len()
    }

    pub fn row(&self, row: usize) -> Option<TrackerRow> {
        if let Some((tier, url)) = self.trackers.get(row) {
            return Some(TrackerRow {
                tier: TrackerTier::Tier(*tier),
                url: url.clone(),
            });
        }
        self.web_seeds
            .get(row - self.trackers.len())
            .map(|url| TrackerRow {
                tier: TrackerTier::WebSeed,
                url: url.clone(),
            })
    }

    pub fn rows(&self) -> Vec<TrackerRow> {
        (0..self.row_count()).filter_map(|i| self.row(i)).collect()
    }

    /// Format the tracker table; a short note when there are no rows.
    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n\n", format_section_heading("Trackers", color)));
        if self.row_count() == 0 {
            out.push_str("No trackers or web seeds.\n");
            return out;
        }
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Tier", "URL"]);
        for row in self.rows() {
            table.add_row(vec![row.tier.to_string(), row.url]);
        }
        if let Some(column) = table.column_mut(0) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        out.push_str(&format!("{}\n", table));
        out
    }
}
