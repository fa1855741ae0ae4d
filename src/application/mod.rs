//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Repository traitに依存（実装には依存しない）
//! - ドキュメントストアの詳細は知らない
//!
//! ## 構成要素
//!
//! - **use_cases**: ユースケース

pub mod use_cases;
