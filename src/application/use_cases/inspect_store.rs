//! # Inspect Store Use Case
//!
//! 保存済みデータの参照ユースケース（読み取り専用）

use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{NotificationState, ValidationResult};
use crate::domain::repositories::notification_repository::NotificationRepository;
use crate::domain::repositories::validation_repository::ValidationRepository;

/// ステータスごとの件数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    /// バリデーション結果の総数
    pub total: usize,
    /// ステータス名 → 件数
    pub by_status: BTreeMap<String, usize>,
}

/// 保存済みデータ参照ユースケース
pub struct InspectStoreUseCase<V: ValidationRepository, N: NotificationRepository> {
    validation_repository: Arc<V>,
    notification_repository: Arc<N>,
}

impl<V: ValidationRepository, N: NotificationRepository> InspectStoreUseCase<V, N> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `validation_repository` - バリデーションリポジトリ
    /// * `notification_repository` - 通知リポジトリ
    pub fn new(validation_repository: Arc<V>, notification_repository: Arc<N>) -> Self {
        Self {
            validation_repository,
            notification_repository,
        }
    }

    /// 全てのバリデーション結果を名前順で返す
    pub fn list_validations(&self) -> Result<Vec<ValidationResult>> {
        let mut results = self.validation_repository.fetch_all_validation_results()?;
        results.sort_by(|a, b| a.validation_name.cmp(&b.validation_name));
        Ok(results)
    }

    pub fn show_validation(&self, validation_name: &str) -> Result<Option<ValidationResult>> {
        self.validation_repository
            .fetch_last_validation_result(validation_name)
    }

    pub fn show_notification(&self, validation_name: &str) -> Result<Option<NotificationState>> {
        self.notification_repository
            .fetch_last_notification_for_a_validation(validation_name)
    }

    /// ステータスごとの件数を集計
    pub fn status_summary(&self) -> Result<StatusSummary> {
        let results = self.validation_repository.fetch_all_validation_results()?;

        let mut summary = StatusSummary {
            total: results.len(),
            ..StatusSummary::default()
        };
        for result in results {
            *summary.by_status.entry(result.status).or_insert(0) += 1;
        }

        Ok(summary)
    }
}
