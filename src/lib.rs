//! # lifeguard-tinydb
//!
//! Lifeguard のバリデーション結果と通知状態を、TinyDB 互換の
//! JSONドキュメントストアに保存するリポジトリ
//!
//! クリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、タイムスタンプ形式、Repository trait
//! - **Application層**: 保存済みデータの参照ユースケース
//! - **Adapter層**: ドキュメントストア、TinyDB リポジトリ、設定
//! - **Driver層**: 参照用CLI、依存性注入
//!
//! ```no_run
//! use lifeguard_tinydb::adapter::config::Settings;
//! use lifeguard_tinydb::adapter::repositories::tinydb_validation_repository::TinyDbValidationRepository;
//! use lifeguard_tinydb::domain::entities::ValidationResult;
//! use lifeguard_tinydb::domain::repositories::validation_repository::ValidationRepository;
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = Settings::from_env().open_store()?;
//! let repository = TinyDbValidationRepository::new(&store);
//!
//! repository.save_validation_result(&ValidationResult::new(
//!     "disk-check",
//!     "success",
//!     json!({"free_gb": 120}),
//! ))?;
//! assert!(repository.fetch_last_validation_result("disk-check")?.is_some());
//! # Ok(())
//! # }
//! ```

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
