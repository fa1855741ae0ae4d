//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **InspectStoreUseCase**: 保存済みのバリデーション結果と通知状態の参照

pub mod inspect_store;
