//! # ValidationResult Entity
//!
//! 名前付きバリデーションの最新実行結果

use chrono::NaiveDateTime;
use serde_json::Value;

/// バリデーション結果
///
/// `validation_name` ごとに最新の1件だけが保存される
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// バリデーション名（一意キー）
    pub validation_name: String,
    /// 実行結果のステータス（"success" / "failure" / "warning" などホスト側で定義）
    pub status: String,
    /// 任意の詳細情報
    pub details: Value,
    /// バリデーションの設定（なければ null として保存）
    pub settings: Option<Value>,
    /// 最終実行日時（分単位で保存される）
    pub last_execution: Option<NaiveDateTime>,
}

impl ValidationResult {
    /// 設定と実行日時を持たないバリデーション結果を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use lifeguard_tinydb::domain::entities::ValidationResult;
    /// use serde_json::json;
    ///
    /// let result = ValidationResult::new("disk-check", "success", json!({"free_gb": 120}));
    ///
    /// assert_eq!(result.validation_name, "disk-check");
    /// assert!(result.settings.is_none());
    /// assert!(result.last_execution.is_none());
    /// ```
    pub fn new(
        validation_name: impl Into<String>,
        status: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            validation_name: validation_name.into(),
            status: status.into(),
            details,
            settings: None,
            last_execution: None,
        }
    }

    /// 設定を付与
    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = Some(settings);
        self
    }

    /// 最終実行日時を付与
    pub fn with_last_execution(mut self, last_execution: NaiveDateTime) -> Self {
        self.last_execution = Some(last_execution);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let at = NaiveDate::from_ymd_opt(2020, 11, 19)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let result = ValidationResult::new("name", "failure", json!({}))
            .with_settings(json!({"threshold": 10}))
            .with_last_execution(at);

        assert_eq!(result.status, "failure");
        assert_eq!(result.settings, Some(json!({"threshold": 10})));
        assert_eq!(result.last_execution, Some(at));
    }
}
