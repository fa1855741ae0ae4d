//! Document Store Errors
//!
//! ストア層のエラー（I/O や JSON のエラーは source として保持）

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access database file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("database file {} is not a valid document store", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to (de)serialize document")]
    Record(#[from] serde_json::Error),

    #[error("record must serialize to a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("no document id left to allocate in table [{table}]")]
    IdsExhausted { table: String },
}
