//! Per-directory configuration: which strategy and encoding own a
//! directory, and the extension used for per-record files.
//!
//! The on-disk encodings carry no header or version field, so a directory's
//! active strategy must be known out-of-band. It lives in
//! `<dir>/jotfile.toml`, loaded in priority order:
//! 1. environment (`JOTFILE_STORAGE`, `JOTFILE_FILE_EXT`);
//! 2. the directory's `jotfile.toml`;
//! 3. compiled defaults.

use crate::error::{Result, StoreError};
use confique::Config;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Name of the per-directory config file.
pub const CONFIG_FILE_NAME: &str = "jotfile.toml";

/// The concrete storage strategy plus encoding for a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Process-local map, nothing is saved.
    Memory,
    /// One plain-text file per note.
    TextDir,
    /// One JSON object file per note.
    JsonDir,
    /// Single `notes.txt` holding a JSON array.
    JsonFile,
    /// Single `notes.txt` holding delimited id/content pairs.
    PairsFile,
}

impl StorageKind {
    pub fn name(&self) -> &'static str {
        match self {
            StorageKind::Memory => "memory",
            StorageKind::TextDir => "text-dir",
            StorageKind::JsonDir => "json-dir",
            StorageKind::JsonFile => "json-file",
            StorageKind::PairsFile => "pairs-file",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StorageKind {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "memory" => Ok(StorageKind::Memory),
            "text-dir" => Ok(StorageKind::TextDir),
            "json-dir" => Ok(StorageKind::JsonDir),
            "json-file" => Ok(StorageKind::JsonFile),
            "pairs-file" => Ok(StorageKind::PairsFile),
            other => Err(StoreError::InvalidArgument(format!(
                "unknown storage kind {other:?}; expected one of \
                 memory|text-dir|json-dir|json-file|pairs-file"
            ))),
        }
    }
}

/// Configuration for one storage directory, stored in `jotfile.toml`.
#[derive(Config, Debug, Clone)]
pub struct JotConfig {
    /// Storage strategy for this directory.
    #[config(env = "JOTFILE_STORAGE", default = "json-file")]
    pub storage: String,

    /// Extension for per-record note files (e.g. ".txt", ".md").
    #[config(env = "JOTFILE_FILE_EXT", default = ".txt")]
    pub file_ext: String,
}

impl JotConfig {
    /// Load the configuration governing `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let file = dir.join(CONFIG_FILE_NAME);
        let mut builder = Self::builder().env();
        if file.exists() {
            builder = builder.file(&file);
        }
        builder.load().map_err(|err| StoreError::Construction {
            path: file,
            reason: err.to_string(),
        })
    }

    pub fn storage_kind(&self) -> Result<StorageKind> {
        self.storage.parse()
    }

    /// The per-record file extension, normalized to start with a dot.
    pub fn file_ext(&self) -> String {
        if self.file_ext.starts_with('.') {
            self.file_ext.clone()
        } else {
            format!(".{}", self.file_ext)
        }
    }
}
