//! Format torrent summaries, sizes, and section headings as text.

use crate::config::DisplayConfig;
use crate::metainfo::TorrentMetadata;
use chrono::{DateTime, Local, TimeZone};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::fmt::Display;

const UNITS: [char; 7] = ['B', 'K', 'M', 'G', 'T', 'P', 'E'];
const UNIT_PRECISION: [usize; 7] = [0, 1, 1, 2, 2, 3, 3];

/// Human readable size, e.g. `2.0 K`.
///
/// The value is divided by 1024 while it is at least `unit_threshold`, so a
/// threshold of 1000 switches units earlier than the plain binary one.
pub fn human_size(size: u64, unit_threshold: u64) -> String {
    let threshold = unit_threshold as f64;
    let mut value = size as f64;
    let mut unit = 0;
    while value.abs() >= threshold && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!(
        "{:.prec$} {}",
        value,
        UNITS[unit],
        prec = UNIT_PRECISION[unit]
    )
}

/// Format a section heading with bold/underline when color is enabled.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Creation date and creator joined by `", "`; empty when neither is known.
pub fn format_created<Tz>(creation_date: Option<i64>, created_by: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = creation_date
        .filter(|secs| *secs != 0)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.with_timezone(tz).format("%a %b %-d %H:%M:%S %Y").to_string());
    let creator = created_by.filter(|c| !c.is_empty());

    match (date, creator) {
        (Some(date), Some(creator)) => format!("{}, {}", date, creator),
        (Some(date), None) => date,
        (None, Some(creator)) => creator.to_string(),
        (None, None) => String::new(),
    }
}

/// Info-hashes one per line, v1 before v2.
pub fn format_hashes(metadata: &TorrentMetadata) -> String {
    [&metadata.info_hash_v1, &metadata.info_hash_v2]
        .into_iter()
        .flatten()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Piece layout as `<count> x <piece size> = <total size>`.
pub fn format_pieces(num_pieces: u64, piece_length: u64, total_size: u64, unit_threshold: u64) -> String {
    format!(
        "{} x {} = {}",
        num_pieces,
        human_size(piece_length, unit_threshold),
        human_size(total_size, unit_threshold)
    )
}

/// Format the torrent summary block (name, comment, creation, hashes, pieces, files).
pub fn format_summary_text(metadata: &TorrentMetadata, display: &DisplayConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Torrent", display.color)
    ));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.add_row(vec!["Name".to_string(), metadata.name.clone()]);
    if let Some(comment) = metadata.comment.as_deref().filter(|c| !c.is_empty()) {
        table.add_row(vec!["Comment".to_string(), comment.to_string()]);
    }
    let created = format_created(
        metadata.creation_date,
        metadata.created_by.as_deref(),
        &Local,
    );
    if !created.is_empty() {
        table.add_row(vec!["Created".to_string(), created]);
    }
    table.add_row(vec!["Info hash".to_string(), format_hashes(metadata)]);
    table.add_row(vec![
        "Pieces".to_string(),
        format_pieces(
            metadata.num_pieces,
            metadata.piece_length,
            metadata.total_size(),
            display.summary_unit_threshold,
        ),
    ]);
    table.add_row(vec!["Files".to_string(), metadata.files.len().to_string()]);
    out.push_str(&format!("{}\n", table));
    out
}
