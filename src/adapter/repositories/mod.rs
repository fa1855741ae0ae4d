//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod tinydb_notification_repository;
pub mod tinydb_validation_repository;
