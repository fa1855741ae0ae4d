//! # Domain Layer
//!
//! Lifeguard のバリデーション結果と通知状態を表すビジネスルールとエンティティ
//!
//! ## 特徴
//!
//! - ドキュメントストアやファイル形式について何も知らない
//! - 永続化は Repository trait を通じてのみ行う
//!
//! ## 構成要素
//!
//! - **entities**: ValidationResult, NotificationStatus, NotificationState
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: タイムスタンプの文字列表現（`"YYYY-MM-DD HH:MM"`）

pub mod entities;
pub mod repositories;
pub mod services;
