//! JSON File Storage
//!
//! データベース全体を1つのJSONファイルとして読み書きする
//!
//! ファイル形式は TinyDB の JSONStorage と互換:
//! `{"<table>": {"<doc_id>": {...record...}}}`

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use super::{Database, StoreError};

/// JSONファイルベースのストレージ
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルからデータベースを読み込む
    ///
    /// ファイルが存在しない、または空の場合は空のデータベースとして扱う
    pub fn read(&self) -> Result<Database, StoreError> {
        if !self.path.exists() {
            debug!(
                "Database file {} does not exist yet, reading as empty",
                self.path.display()
            );
            return Ok(Database::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        if content.trim().is_empty() {
            warn!(
                "Database file {} is empty, treating it as a fresh database",
                self.path.display()
            );
            return Ok(Database::new());
        }

        let database: Database =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Read {} table(s) from {}",
            database.len(),
            self.path.display()
        );

        Ok(database)
    }

    /// データベース全体をファイルに書き込む
    pub fn write(&self, database: &Database) -> Result<(), StoreError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(database)?;

        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "Wrote {} table(s) to {}",
            database.len(),
            self.path.display()
        );

        Ok(())
    }
}
