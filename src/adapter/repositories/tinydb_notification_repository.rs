//! TinyDB Notification Repository Implementation
//!
//! NotificationRepositoryのドキュメントストア実装（`notifications` テーブル）

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::adapter::document_store::{
    from_document, to_document, Document, DocumentStore, DocumentTable, Query, Table,
};
use crate::domain::entities::{NotificationState, NotificationStatus};
use crate::domain::repositories::notification_repository::NotificationRepository;
use crate::domain::services::timestamp::{format_timestamp, parse_optional};

/// 通知状態を保存するテーブル名
pub const NOTIFICATIONS_TABLE: &str = "notifications";

/// 保存時刻の取得元
pub type Clock = fn() -> NaiveDateTime;

/// ローカル時刻（タイムゾーン情報は保存しない）
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// ドキュメントストアベースの通知リポジトリ
pub struct TinyDbNotificationRepository<T: DocumentTable = Table> {
    table: T,
    clock: Clock,
}

/// 通知状態（ドキュメント永続化用の内部表現）
#[derive(Debug, Deserialize, Serialize)]
struct NotificationRecord {
    validation_name: String,
    #[serde(default)]
    thread_ids: Value,
    #[serde(default)]
    is_opened: bool,
    #[serde(default)]
    options: Value,
    #[serde(default)]
    last_notification: Option<String>,
}

impl TinyDbNotificationRepository<Table> {
    /// ストアの `notifications` テーブルを使うリポジトリを作成
    pub fn new(store: &Arc<DocumentStore>) -> Self {
        Self::with_table(store.table(NOTIFICATIONS_TABLE))
    }
}

impl<T: DocumentTable> TinyDbNotificationRepository<T> {
    pub fn with_table(table: T) -> Self {
        Self {
            table,
            clock: local_now,
        }
    }

    /// 保存時刻の取得元を差し替える
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn open_by_name(validation_name: &str) -> Query {
        Query::new()
            .eq("validation_name", validation_name)
            .eq("is_opened", true)
    }

    fn to_domain(record: NotificationRecord) -> Result<NotificationState> {
        let last_notification = parse_optional(record.last_notification.as_deref())
            .with_context(|| {
                format!(
                    "Invalid last_notification stored for validation {}",
                    record.validation_name
                )
            })?;

        Ok(NotificationState {
            validation_name: record.validation_name,
            thread_ids: record.thread_ids,
            is_opened: record.is_opened,
            options: record.options,
            last_notification,
        })
    }

    /// 保存入力からレコード形式に変換（オープン状態と現在時刻を付与）
    fn from_domain(status: &NotificationStatus, now: &NaiveDateTime) -> NotificationRecord {
        NotificationRecord {
            validation_name: status.validation_name.clone(),
            thread_ids: status.thread_ids.clone(),
            is_opened: true,
            options: status.options.clone(),
            last_notification: Some(format_timestamp(now)),
        }
    }

    fn decode(document: Document) -> Result<NotificationState> {
        let record: NotificationRecord =
            from_document(document).context("Failed to decode notification record")?;
        Self::to_domain(record)
    }
}

impl<T: DocumentTable> NotificationRepository for TinyDbNotificationRepository<T> {
    fn fetch_last_notification_for_a_validation(
        &self,
        validation_name: &str,
    ) -> Result<Option<NotificationState>> {
        let document = self.table.get(&Self::open_by_name(validation_name))?;
        document.map(Self::decode).transpose()
    }

    fn save_last_notification_for_a_validation(&self, status: &NotificationStatus) -> Result<()> {
        let now = (self.clock)();
        let document = to_document(&Self::from_domain(status, &now))?;
        self.table
            .upsert(document, &Self::open_by_name(&status.validation_name))?;
        Ok(())
    }
}
