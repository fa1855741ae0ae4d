//! Adapter Layer
//!
//! 外部システム（JSONドキュメントストア、環境変数）との統合

pub mod config;
pub mod document_store;
pub mod repositories;
