//! Decoded torrent metadata
//!
//! The binary `.torrent` format is decoded elsewhere; this module reads the
//! decoded result from JSON and checks it before it reaches the views.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One file recorded in the torrent, path relative to the torrent root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub size: u64,
}

/// Announce URL with its tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerEntry {
    #[serde(default)]
    pub tier: u32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentMetadata {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Creation time in seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// SHA-1 info-hash, hex encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_hash_v1: Option<String>,

    /// SHA-256 info-hash, hex encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_hash_v2: Option<String>,

    pub piece_length: u64,
    pub num_pieces: u64,

    pub files: Vec<FileEntry>,

    #[serde(default)]
    pub trackers: Vec<TrackerEntry>,

    #[serde(default)]
    pub web_seeds: Vec<String>,
}

impl TorrentMetadata {
    pub fn from_json_str(json: &str) -> Result<Self, ApiError> {
        let metadata: TorrentMetadata = serde_json::from_str(json)?;
        metadata.validate()?;
        Ok(metadata)
    }

    pub fn from_path(path: &Path) -> Result<Self, ApiError> {
        let json = std::fs::read_to_string(path)?;
        let metadata = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            name = %metadata.name,
            files = metadata.files.len(),
            "Loaded torrent metadata"
        );
        Ok(metadata)
    }

    /// Check hash encodings, that the torrent lists at least one file, and that
    /// the file sizes add up within `u64`.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.files.is_empty() {
            return Err(ApiError::InvalidMetadata(
                "torrent lists no files".to_string(),
            ));
        }
        self.files
            .iter()
            .try_fold(0u64, |total, f| total.checked_add(f.size))
            .ok_or_else(|| ApiError::InvalidMetadata("total size overflows u64".to_string()))?;
        if let Some(hash) = &self.info_hash_v1 {
            decode_hash("info_hash_v1", hash, 20)?;
        }
        if let Some(hash) = &self.info_hash_v2 {
            decode_hash("info_hash_v2", hash, 32)?;
        }
        Ok(())
    }

    /// Sum of all file sizes as listed, duplicates included, saturating at `u64::MAX`.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).fold(0, u64::saturating_add)
    }

    /// Raw info-hash bytes, v1 first.
    pub fn info_hashes(&self) -> Result<Vec<Vec<u8>>, ApiError> {
        let mut hashes = Vec::new();
        if let Some(hash) = &self.info_hash_v1 {
            hashes.push(decode_hash("info_hash_v1", hash, 20)?);
        }
        if let Some(hash) = &self.info_hash_v2 {
            hashes.push(decode_hash("info_hash_v2", hash, 32)?);
        }
        Ok(hashes)
    }

    /// `(path, size)` pairs in torrent order, as consumed by the file tree.
    pub fn file_pairs(&self) -> impl Iterator<Item = (&str, u64)> {
        self.files.iter().map(|f| (f.path.as_str(), f.size))
    }
}

fn decode_hash(field: &str, value: &str, expected_len: usize) -> Result<Vec<u8>, ApiError> {
    let bytes = hex::decode(value)
        .map_err(|e| ApiError::InvalidMetadata(format!("{} is not valid hex: {}", field, e)))?;
    if bytes.len() != expected_len {
        return Err(ApiError::InvalidMetadata(format!(
            "{} must be {} bytes, got {}",
            field,
            expected_len,
            bytes.len()
        )));
    }
    Ok(bytes)
}
