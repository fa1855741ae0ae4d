//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: ストアを開いて参照コマンドを実行

pub mod cli;
pub mod workflow;

pub use cli::{Args, Command};
pub use workflow::InspectWorkflow;
