//! # Notification Repository Trait
//!
//! オープンな通知状態の永続化を抽象化

use anyhow::Result;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{NotificationState, NotificationStatus};

/// 通知リポジトリ
///
/// バリデーション名ごとにオープンな通知を最大1件保持する。
/// 通知のクローズはこのリポジトリの責務ではない。
#[cfg_attr(test, automock)]
pub trait NotificationRepository: Send + Sync {
    /// 指定したバリデーションのオープンな通知を取得
    ///
    /// `is_opened == false` のレコードは名前が一致しても返さない
    fn fetch_last_notification_for_a_validation(
        &self,
        validation_name: &str,
    ) -> Result<Option<NotificationState>>;

    /// 通知状態を保存する
    ///
    /// 常に `is_opened = true` と現在時刻を付与し、
    /// オープンな同名レコードがなければ挿入、あれば上書き更新する
    fn save_last_notification_for_a_validation(&self, status: &NotificationStatus) -> Result<()>;
}
