//! TinyDB Validation Repository Implementation
//!
//! ValidationRepositoryのドキュメントストア実装（`validations` テーブル）

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::adapter::document_store::{
    from_document, to_document, Document, DocumentStore, DocumentTable, Query, Table,
};
use crate::domain::entities::ValidationResult;
use crate::domain::repositories::validation_repository::ValidationRepository;
use crate::domain::services::timestamp::{format_optional, parse_optional};

/// バリデーション結果を保存するテーブル名
pub const VALIDATIONS_TABLE: &str = "validations";

/// ドキュメントストアベースのバリデーションリポジトリ
pub struct TinyDbValidationRepository<T: DocumentTable = Table> {
    table: T,
}

/// バリデーション結果（ドキュメント永続化用の内部表現）
#[derive(Debug, Deserialize, Serialize)]
struct ValidationRecord {
    validation_name: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Value,
    #[serde(default)]
    settings: Option<Value>,
    #[serde(default)]
    last_execution: Option<String>,
}

impl TinyDbValidationRepository<Table> {
    /// ストアの `validations` テーブルを使うリポジトリを作成
    pub fn new(store: &Arc<DocumentStore>) -> Self {
        Self::with_table(store.table(VALIDATIONS_TABLE))
    }
}

impl<T: DocumentTable> TinyDbValidationRepository<T> {
    pub fn with_table(table: T) -> Self {
        Self { table }
    }

    fn by_name(validation_name: &str) -> Query {
        Query::new().eq("validation_name", validation_name)
    }

    /// レコード形式からDomain形式に変換
    fn to_domain(record: ValidationRecord) -> Result<ValidationResult> {
        let last_execution = parse_optional(record.last_execution.as_deref()).with_context(|| {
            format!(
                "Invalid last_execution stored for validation {}",
                record.validation_name
            )
        })?;

        Ok(ValidationResult {
            validation_name: record.validation_name,
            status: record.status.unwrap_or_default(),
            details: record.details,
            settings: record.settings,
            last_execution,
        })
    }

    /// Domain形式からレコード形式に変換
    fn from_domain(result: &ValidationResult) -> ValidationRecord {
        ValidationRecord {
            validation_name: result.validation_name.clone(),
            status: Some(result.status.clone()),
            details: result.details.clone(),
            settings: result.settings.clone(),
            last_execution: format_optional(result.last_execution.as_ref()),
        }
    }

    fn decode(document: Document) -> Result<ValidationResult> {
        let record: ValidationRecord =
            from_document(document).context("Failed to decode validation record")?;
        Self::to_domain(record)
    }
}

impl<T: DocumentTable> ValidationRepository for TinyDbValidationRepository<T> {
    fn fetch_last_validation_result(
        &self,
        validation_name: &str,
    ) -> Result<Option<ValidationResult>> {
        let document = self.table.get(&Self::by_name(validation_name))?;
        document.map(Self::decode).transpose()
    }

    fn fetch_all_validation_results(&self) -> Result<Vec<ValidationResult>> {
        let documents = self.table.all()?;
        debug!("Loaded {} validation record(s)", documents.len());
        documents.into_iter().map(Self::decode).collect()
    }

    fn save_validation_result(&self, result: &ValidationResult) -> Result<()> {
        let document = to_document(&Self::from_domain(result))?;
        self.table
            .upsert(document, &Self::by_name(&result.validation_name))?;
        Ok(())
    }
}
