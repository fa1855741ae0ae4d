//! Document Table
//!
//! 名前付きテーブルへの操作と、リポジトリがモックできる抽象 `DocumentTable`

use log::{debug, info};
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use super::{DocId, Document, DocumentStore, Query, StoreError, TableData};

/// `upsert` の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// 一致するドキュメントがなく、新規に挿入した
    Inserted(DocId),
    /// 一致したドキュメントを更新した
    Updated(Vec<DocId>),
}

/// Trait for table operations
/// This enables mocking in tests while using the file-backed table in production
#[cfg_attr(test, automock)]
pub trait DocumentTable: Send + Sync {
    /// 最初に一致したドキュメント（ID順）
    fn get(&self, query: &Query) -> Result<Option<Document>, StoreError>;

    /// 全てのドキュメント（ID順）
    fn all(&self) -> Result<Vec<Document>, StoreError>;

    fn count(&self, query: &Query) -> Result<usize, StoreError>;

    fn insert(&self, document: Document) -> Result<DocId, StoreError>;

    /// 一致する全てのドキュメントにフィールドをマージする
    fn update(&self, fields: Document, query: &Query) -> Result<Vec<DocId>, StoreError>;

    /// 一致件数が0なら挿入、そうでなければ一致する全てを更新する
    ///
    /// 件数の確認と書き込みは1回の読み込み・書き込みの中で行われる
    fn upsert(&self, document: Document, query: &Query) -> Result<UpsertOutcome, StoreError>;
}

/// ファイルに保存されたテーブル
#[derive(Debug, Clone)]
pub struct Table {
    store: Arc<DocumentStore>,
    name: String,
}

impl Table {
    pub(super) fn new(store: Arc<DocumentStore>, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }

    fn matching_ids(table: &TableData, query: &Query) -> Vec<DocId> {
        table
            .iter()
            .filter(|(_, document)| query.matches(document))
            .map(|(id, _)| *id)
            .collect()
    }

    fn next_id(&self, table: &TableData) -> Result<DocId, StoreError> {
        match table.keys().next_back() {
            None => Ok(1),
            Some(last) => last.checked_add(1).ok_or_else(|| StoreError::IdsExhausted {
                table: self.name.clone(),
            }),
        }
    }

    fn insert_into(&self, table: &mut TableData, document: Document) -> Result<DocId, StoreError> {
        let id = self.next_id(table)?;
        table.insert(id, document);
        Ok(id)
    }

    fn merge_into(table: &mut TableData, ids: &[DocId], fields: &Document) {
        for id in ids {
            if let Some(document) = table.get_mut(id) {
                for (key, value) in fields {
                    document.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

impl DocumentTable for Table {
    fn get(&self, query: &Query) -> Result<Option<Document>, StoreError> {
        let table = self.store.read_table(&self.name)?;
        let found = table.into_values().find(|document| query.matches(document));

        debug!(
            "get [{}] where {}: {}",
            self.name,
            query,
            if found.is_some() { "hit" } else { "miss" }
        );

        Ok(found)
    }

    fn all(&self) -> Result<Vec<Document>, StoreError> {
        let table = self.store.read_table(&self.name)?;
        Ok(table.into_values().collect())
    }

    fn count(&self, query: &Query) -> Result<usize, StoreError> {
        let table = self.store.read_table(&self.name)?;
        Ok(table.values().filter(|document| query.matches(document)).count())
    }

    fn insert(&self, document: Document) -> Result<DocId, StoreError> {
        let id = self.store.modify(|database| {
            let table = database.entry(self.name.clone()).or_default();
            let id = self.insert_into(table, document);
            let changed = id.is_ok();
            (id, changed)
        })??;

        info!("Inserted document {} into [{}]", id, self.name);
        Ok(id)
    }

    fn update(&self, fields: Document, query: &Query) -> Result<Vec<DocId>, StoreError> {
        let ids = self.store.modify(|database| {
            let table = database.entry(self.name.clone()).or_default();
            let ids = Self::matching_ids(table, query);
            Self::merge_into(table, &ids, &fields);
            let changed = !ids.is_empty();
            (ids, changed)
        })?;

        info!("Updated {} document(s) in [{}] where {}", ids.len(), self.name, query);
        Ok(ids)
    }

    fn upsert(&self, document: Document, query: &Query) -> Result<UpsertOutcome, StoreError> {
        let outcome = self.store.modify(|database| {
            let table = database.entry(self.name.clone()).or_default();
            let ids = Self::matching_ids(table, query);

            let outcome = if ids.is_empty() {
                self.insert_into(table, document).map(UpsertOutcome::Inserted)
            } else {
                Self::merge_into(table, &ids, &document);
                Ok(UpsertOutcome::Updated(ids))
            };
            let changed = outcome.is_ok();
            (outcome, changed)
        })??;

        match &outcome {
            UpsertOutcome::Inserted(id) => {
                info!("Inserted document {} into [{}] ({} had no match)", id, self.name, query)
            }
            UpsertOutcome::Updated(ids) => {
                info!("Updated document(s) {:?} in [{}] where {}", ids, self.name, query)
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    fn open_table(dir: &TempDir, name: &str) -> Table {
        let store = DocumentStore::open(dir.path().join("db.json")).unwrap();
        store.table(name)
    }

    #[test]
    fn test_insert_allocates_increasing_ids() {
        let dir = TempDir::new().unwrap();
        let table = open_table(&dir, "validations");

        assert_eq!(table.insert(doc(json!({"n": 1}))).unwrap(), 1);
        assert_eq!(table.insert(doc(json!({"n": 2}))).unwrap(), 2);
        assert_eq!(table.all().unwrap().len(), 2);
    }

    #[test]
    fn test_get_returns_first_match() {
        let dir = TempDir::new().unwrap();
        let table = open_table(&dir, "t");
        table.insert(doc(json!({"k": "a", "v": 1}))).unwrap();
        table.insert(doc(json!({"k": "a", "v": 2}))).unwrap();

        let found = table.get(&Query::new().eq("k", "a")).unwrap().unwrap();
        assert_eq!(found["v"], json!(1));
        assert!(table.get(&Query::new().eq("k", "b")).unwrap().is_none());
    }

    #[test]
    fn test_count() {
        let dir = TempDir::new().unwrap();
        let table = open_table(&dir, "t");
        table.insert(doc(json!({"k": "a"}))).unwrap();
        table.insert(doc(json!({"k": "a"}))).unwrap();
        table.insert(doc(json!({"k": "b"}))).unwrap();

        assert_eq!(table.count(&Query::new().eq("k", "a")).unwrap(), 2);
        assert_eq!(table.count(&Query::new().eq("k", "z")).unwrap(), 0);
        assert_eq!(table.count(&Query::new()).unwrap(), 3);
    }

    #[test]
    fn test_update_merges_fields() {
        let dir = TempDir::new().unwrap();
        let table = open_table(&dir, "t");
        table.insert(doc(json!({"k": "a", "keep": true, "v": 1}))).unwrap();

        let ids = table
            .update(doc(json!({"v": 2})), &Query::new().eq("k", "a"))
            .unwrap();

        assert_eq!(ids, vec![1]);
        let found = table.get(&Query::new().eq("k", "a")).unwrap().unwrap();
        assert_eq!(found, doc(json!({"k": "a", "keep": true, "v": 2})));
    }

    #[test]
    fn test_update_without_match_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let table = open_table(&dir, "t");

        let ids = table
            .update(doc(json!({"v": 2})), &Query::new().eq("k", "a"))
            .unwrap();

        assert!(ids.is_empty());
        assert!(table.all().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_inserts_then_updates() {
        let dir = TempDir::new().unwrap();
        let table = open_table(&dir, "t");
        let query = Query::new().eq("k", "a");

        let first = table.upsert(doc(json!({"k": "a", "v": 1})), &query).unwrap();
        let second = table.upsert(doc(json!({"k": "a", "v": 2})), &query).unwrap();

        assert_eq!(first, UpsertOutcome::Inserted(1));
        assert_eq!(second, UpsertOutcome::Updated(vec![1]));
        assert_eq!(table.count(&query).unwrap(), 1);
        assert_eq!(table.all().unwrap()[0]["v"], json!(2));
    }

    #[test]
    fn test_tables_are_independent() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::open(dir.path().join("db.json")).unwrap();
        let validations = store.table("validations");
        let notifications = store.table("notifications");

        validations.insert(doc(json!({"k": "a"}))).unwrap();

        assert_eq!(validations.all().unwrap().len(), 1);
        assert!(notifications.all().unwrap().is_empty());
        assert_eq!(notifications.insert(doc(json!({"k": "b"}))).unwrap(), 1);
    }

    #[test]
    fn test_next_id_follows_highest_existing_id() {
        let dir = TempDir::new().unwrap();
        let handle = open_table(&dir, "t");
        let mut table = TableData::new();
        assert_eq!(handle.next_id(&table).unwrap(), 1);

        table.insert(3, Document::new());
        table.insert(9, Document::new());
        assert_eq!(handle.next_id(&table).unwrap(), 10);
    }

    #[test]
    fn test_insert_fails_when_ids_are_exhausted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let content = format!(
            r#"{{"validations": {{"{}": {{"validation_name": "last"}}}}}}"#,
            u64::MAX
        );
        std::fs::write(&path, &content).unwrap();
        let table = DocumentStore::open(&path).unwrap().table("validations");

        let upserted = table.upsert(
            doc(json!({"validation_name": "new"})),
            &Query::new().eq("validation_name", "new"),
        );
        let inserted = table.insert(doc(json!({"validation_name": "new"})));

        assert!(matches!(upserted, Err(StoreError::IdsExhausted { .. })));
        assert!(matches!(inserted, Err(StoreError::IdsExhausted { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_upsert_updates_record_at_highest_id() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(
            &path,
            format!(r#"{{"t": {{"{}": {{"k": "a", "v": 1}}}}}}"#, u64::MAX),
        )
        .unwrap();
        let table = DocumentStore::open(&path).unwrap().table("t");

        let outcome = table
            .upsert(doc(json!({"k": "a", "v": 2})), &Query::new().eq("k", "a"))
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Updated(vec![u64::MAX]));
    }
}
