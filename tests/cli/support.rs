use std::path::PathBuf;
use tempfile::TempDir;
use torview::config::{DisplayConfig, TorviewConfig};
use torview::tooling::cli::CliContext;

pub const SAMPLE_METADATA: &str = r#"{
    "name": "Holiday Movie",
    "comment": "Family footage",
    "creation_date": 1700000000,
    "created_by": "mktorrent 1.1",
    "info_hash_v1": "0123456789abcdef0123456789abcdef01234567",
    "piece_length": 262144,
    "num_pieces": 5,
    "files": [
        {"path": "Holiday Movie/movie.mkv", "size": 1000000},
        {"path": "Holiday Movie/extras/poster.jpg", "size": 2000},
        {"path": "Holiday Movie/extras/trailer.mp4", "size": 50000},
        {"path": "Holiday Movie/a_file.txt", "size": 1}
    ],
    "trackers": [
        {"tier": 0, "url": "udp://tracker.example:6969/announce"},
        {"tier": 1, "url": "https://backup.example/announce"}
    ],
    "web_seeds": ["https://seed.example/holiday"]
}"#;

/// Write `json` into a fresh temp dir and return its path with the guard.
pub fn write_metadata(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("metadata.json");
    std::fs::write(&path, json).unwrap();
    (temp_dir, path)
}

/// Context with colors off and otherwise default settings.
pub fn plain_context() -> CliContext {
    CliContext::with_config(TorviewConfig {
        display: DisplayConfig {
            color: false,
            ..DisplayConfig::default()
        },
        ..TorviewConfig::default()
    })
}
