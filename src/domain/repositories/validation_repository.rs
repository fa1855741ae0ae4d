//! # Validation Repository Trait
//!
//! バリデーション結果の永続化を抽象化

use anyhow::Result;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::ValidationResult;

/// バリデーションリポジトリ
///
/// バリデーション名ごとに最新の結果を1件保持する
#[cfg_attr(test, automock)]
pub trait ValidationRepository: Send + Sync {
    /// 指定した名前の最新結果を取得
    ///
    /// # Returns
    ///
    /// 見つからない場合は `None`（エラーではない）
    ///
    /// # Errors
    ///
    /// ストアの読み込み、または保存済み日時の解析に失敗した場合
    fn fetch_last_validation_result(&self, validation_name: &str)
        -> Result<Option<ValidationResult>>;

    /// 保存されている全ての結果を取得（順序はストア依存）
    fn fetch_all_validation_results(&self) -> Result<Vec<ValidationResult>>;

    /// 結果を保存する
    ///
    /// 同名のレコードがなければ挿入、あれば上書き更新する
    ///
    /// # Errors
    ///
    /// ストアの書き込みに失敗した場合
    fn save_validation_result(&self, result: &ValidationResult) -> Result<()>;
}
