//! # Notification Entities
//!
//! 通知の保存入力（NotificationStatus）と保存済み状態（NotificationState）

use chrono::NaiveDateTime;
use serde_json::Value;

/// 通知状態の保存入力
///
/// ホストの通知サブシステムから渡される。
/// 日時とオープン状態はリポジトリが付与するため持たない。
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationStatus {
    /// バリデーション名
    pub validation_name: String,
    /// 配信スレッドの識別子（任意の値）
    pub thread_ids: Value,
    /// 通知オプション
    pub options: Value,
}

impl NotificationStatus {
    /// 新しい通知入力を作成
    pub fn new(validation_name: impl Into<String>, thread_ids: Value, options: Value) -> Self {
        Self {
            validation_name: validation_name.into(),
            thread_ids,
            options,
        }
    }
}

/// 保存済みの通知状態
///
/// 読み出し経路では `is_opened == true` のレコードのみが対象になる
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationState {
    pub validation_name: String,
    pub thread_ids: Value,
    pub is_opened: bool,
    pub options: Value,
    /// 最終通知日時（保存のたびに現在時刻で上書きされる）
    pub last_notification: Option<NaiveDateTime>,
}
