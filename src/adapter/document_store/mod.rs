//! Document Store
//!
//! ローカルのJSONファイルに保存される軽量ドキュメントデータベース
//!
//! - ファイル形式は TinyDB 互換（`{table: {doc_id: record}}`）
//! - 操作のたびにファイルを読み込み、書き込み操作はファイル全体を書き直す
//! - プロセス内の書き込みはロックで直列化される（プロセス間の排他は行わない）

pub mod error;
pub mod query;
pub mod storage;
pub mod table;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

pub use error::StoreError;
pub use query::Query;
pub use storage::JsonStorage;
pub use table::{DocumentTable, Table, UpsertOutcome};

/// ドキュメントID（テーブルごとに1から採番）
pub type DocId = u64;

/// スキーマを持たないレコード
pub type Document = serde_json::Map<String, Value>;

pub type TableData = BTreeMap<DocId, Document>;
pub type Database = BTreeMap<String, TableData>;

/// ドキュメントストアのハンドル
///
/// 呼び出し側が所有し、`Arc` で複数のリポジトリと共有する
#[derive(Debug)]
pub struct DocumentStore {
    storage: JsonStorage,
    lock: Mutex<()>,
}

impl DocumentStore {
    /// 指定したパスのストアを開く
    ///
    /// ファイルが存在しない場合は最初の書き込み時に作成される。
    /// 既存のファイルは開く時点で形式を検証する。
    ///
    /// # Errors
    ///
    /// 既存ファイルの読み込みや解析に失敗した場合
    pub fn open(path: impl Into<PathBuf>) -> Result<Arc<Self>, StoreError> {
        let storage = JsonStorage::new(path);
        let database = storage.read()?;

        info!(
            "Opened document store {} ({} table(s))",
            storage.path().display(),
            database.len()
        );

        Ok(Arc::new(Self {
            storage,
            lock: Mutex::new(()),
        }))
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// 名前付きテーブルのハンドルを取得（テーブルは最初の書き込みで作成される）
    pub fn table(self: &Arc<Self>, name: &str) -> Table {
        Table::new(Arc::clone(self), name)
    }

    /// 保存されているテーブル名の一覧
    pub fn tables(&self) -> Result<Vec<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.storage.read()?.into_keys().collect())
    }

    /// ハンドルを閉じる
    ///
    /// 書き込みは操作ごとにファイルへ反映済みのため、ここではハンドルを手放すだけ
    pub fn close(self: Arc<Self>) {
        let remaining = Arc::strong_count(&self) - 1;
        info!(
            "Closing document store {} ({} other handle(s) still open)",
            self.path().display(),
            remaining
        );
    }

    pub(crate) fn read_table(&self, name: &str) -> Result<TableData, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut database = self.storage.read()?;
        Ok(database.remove(name).unwrap_or_default())
    }

    /// ロックを保持したまま読み込み・変更・書き込みを行う
    ///
    /// `apply` が `false` を返した場合は書き込みを省略する
    pub(crate) fn modify<R>(
        &self,
        apply: impl FnOnce(&mut Database) -> (R, bool),
    ) -> Result<R, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut database = self.storage.read()?;

        let (result, changed) = apply(&mut database);
        if changed {
            self.storage.write(&database)?;
        } else {
            debug!("No changes to write to {}", self.path().display());
        }

        Ok(result)
    }
}

/// 値をドキュメントに変換（JSONオブジェクトにならない値はエラー）
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(document) => Ok(document),
        Value::Null => Err(StoreError::NotAnObject { found: "null" }),
        Value::Bool(_) => Err(StoreError::NotAnObject { found: "bool" }),
        Value::Number(_) => Err(StoreError::NotAnObject { found: "number" }),
        Value::String(_) => Err(StoreError::NotAnObject { found: "string" }),
        Value::Array(_) => Err(StoreError::NotAnObject { found: "array" }),
    }
}

/// ドキュメントを値に変換
pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
