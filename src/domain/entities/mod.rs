//! # Domain Entities
//!
//! ホストシステム（Lifeguard）と受け渡しするエンティティ
//!
//! ## エンティティ
//!
//! - **ValidationResult**: 名前付きバリデーションの最新結果
//! - **NotificationStatus**: 通知保存時の入力
//! - **NotificationState**: 保存済みのオープンな通知状態

pub mod notification;
pub mod validation_result;

pub use notification::{NotificationState, NotificationStatus};
pub use validation_result::ValidationResult;
