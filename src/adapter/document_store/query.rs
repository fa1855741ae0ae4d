//! Document Query
//!
//! フィールドの等価条件の AND による検索条件

use serde_json::Value;
use std::fmt;

use super::Document;

/// 検索条件
///
/// 全ての条件のフィールドが存在し、値が等しいドキュメントに一致する。
/// 条件が空の場合は全てのドキュメントに一致する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    conditions: Vec<(String, Value)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// `field == value` の条件を追加
    ///
    /// ```
    /// use lifeguard_tinydb::adapter::document_store::Query;
    ///
    /// let query = Query::new()
    ///     .eq("validation_name", "disk-check")
    ///     .eq("is_opened", true);
    ///
    /// assert_eq!(
    ///     query.to_string(),
    ///     r#"validation_name == "disk-check" AND is_opened == true"#
    /// );
    /// ```
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return write!(f, "<all>");
        }
        for (i, (field, value)) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{} == {}", field, value)?;
        }
        Ok(())
    }
}
