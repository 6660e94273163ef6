//! CLI Tooling
//!
//! Command-line interface for viewing torrent metadata. Each command loads a
//! decoded metadata document, builds the views it needs, and returns the text
//! (or JSON) to print.

use crate::config::{ConfigLoader, DisplayConfig, TorviewConfig};
use crate::error::ApiError;
use crate::format::{format_section_heading, format_summary_text, human_size};
use crate::logging::LoggingConfig;
use crate::metainfo::TorrentMetadata;
use crate::ordering::{SortKey, SortOrder};
use crate::view::{FilesModel, TrackersModel};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Torview CLI - torrent metadata viewer
#[derive(Parser)]
#[command(name = "torview")]
#[command(version)]
#[command(about = "Show torrent metadata and a directories-first file tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true, value_parser = ["json", "text"])]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Merge logging flags over the configured logging section.
    ///
    /// `--log-file` is left out; it goes to [`crate::logging::init_logging`]
    /// separately so it outranks TORVIEW_LOG_FILE.
    pub fn logging_overrides(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut logging = base.clone();
        if self.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        logging
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show summary, trackers, and file tree
    Show {
        /// Decoded torrent metadata (JSON)
        file: PathBuf,
        /// Sort column for the file tree
        #[arg(long, value_parser = ["name", "size"])]
        sort: Option<String>,
        /// Sort descending (directories still come first)
        #[arg(long)]
        descending: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show the file tree only
    Files {
        /// Decoded torrent metadata (JSON)
        file: PathBuf,
        /// Sort column for the file tree
        #[arg(long, value_parser = ["name", "size"])]
        sort: Option<String>,
        /// Sort descending (directories still come first)
        #[arg(long)]
        descending: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show trackers and web seeds
    Trackers {
        /// Decoded torrent metadata (JSON)
        file: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// CLI context holding the loaded configuration
pub struct CliContext {
    config: TorviewConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from the standard sources.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    /// Create a context from an already built configuration.
    pub fn with_config(config: TorviewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TorviewConfig {
        &self.config
    }

    /// Execute a command and return its output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Show {
                file,
                sort,
                descending,
                format,
            } => {
                info!(command = "show", file = %file.display(), "Executing command");
                let display = self.display_for(sort.as_deref(), *descending);
                self.handle_show(file, &display, format)
            }
            Commands::Files {
                file,
                sort,
                descending,
                format,
            } => {
                info!(command = "files", file = %file.display(), "Executing command");
                let display = self.display_for(sort.as_deref(), *descending);
                self.handle_files(file, &display, format)
            }
            Commands::Trackers { file, format } => {
                info!(command = "trackers", file = %file.display(), "Executing command");
                self.handle_trackers(file, format)
            }
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        }
    }

    /// Display settings with per-command sort flags applied.
    fn display_for(&self, sort: Option<&str>, descending: bool) -> DisplayConfig {
        let mut display = self.config.display.clone();
        match sort {
            Some("size") => display.sort_key = SortKey::Size,
            Some("name") => display.sort_key = SortKey::Name,
            _ => {}
        }
        if descending {
            display.sort_order = SortOrder::Descending;
        }
        display
    }

    fn load_files(
        metadata: &TorrentMetadata,
        display: &DisplayConfig,
    ) -> Result<FilesModel, ApiError> {
        let mut files = FilesModel::new(display.policy());
        files.set_files(metadata.file_pairs())?;
        Ok(files)
    }

    fn handle_show(
        &self,
        file: &Path,
        display: &DisplayConfig,
        format: &str,
    ) -> Result<String, ApiError> {
        let metadata = TorrentMetadata::from_path(file)?;
        let files = Self::load_files(&metadata, display)?;
        let mut trackers = TrackersModel::new();
        trackers.set_torrent_info(&metadata);

        if format == "json" {
            let tracker_rows: Vec<_> = trackers
                .rows()
                .into_iter()
                .map(|row| json!({ "tier": row.tier.to_string(), "url": row.url }))
                .collect();
            let value = json!({
                "name": metadata.name,
                "comment": metadata.comment,
                "creation_date": metadata.creation_date,
                "created_by": metadata.created_by,
                "info_hash_v1": metadata.info_hash_v1,
                "info_hash_v2": metadata.info_hash_v2,
                "piece_length": metadata.piece_length,
                "num_pieces": metadata.num_pieces,
                "total_size": files.tree().total_size(),
                "file_count": files.tree().file_count(),
                "trackers": tracker_rows,
                "files": files.entries(),
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut out = format_summary_text(&metadata, display);
        out.push('\n');
        out.push_str(&trackers.render(display.color));
        out.push('\n');
        out.push_str(&Self::files_text(&files, display));
        Ok(out)
    }

    fn handle_files(
        &self,
        file: &Path,
        display: &DisplayConfig,
        format: &str,
    ) -> Result<String, ApiError> {
        let metadata = TorrentMetadata::from_path(file)?;
        let files = Self::load_files(&metadata, display)?;
        if format == "json" {
            return Ok(serde_json::to_string_pretty(&files.entries())?);
        }
        Ok(Self::files_text(&files, display))
    }

    fn handle_trackers(&self, file: &Path, format: &str) -> Result<String, ApiError> {
        let metadata = TorrentMetadata::from_path(file)?;
        let mut trackers = TrackersModel::new();
        trackers.set_torrent_info(&metadata);
        if format == "json" {
            let rows: Vec<_> = trackers
                .rows()
                .into_iter()
                .map(|row| json!({ "tier": row.tier.to_string(), "url": row.url }))
                .collect();
            return Ok(serde_json::to_string_pretty(&rows)?);
        }
        Ok(trackers.render(self.config.display.color))
    }

    fn files_text(files: &FilesModel, display: &DisplayConfig) -> String {
        let tree = files.tree();
        let mut out = String::new();
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading("Files", display.color)
        ));
        out.push_str(&files.render(display.tree_unit_threshold));
        out.push_str(&format!(
            "\nTotal: {} files, {}.\n",
            tree.file_count(),
            human_size(tree.total_size(), display.tree_unit_threshold)
        ));
        out
    }
}
