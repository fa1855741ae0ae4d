//! Settings
//!
//! プラグインが認識する設定項目（`LIFEGUARD_TINYDB_LOCATION`）

use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::document_store::{DocumentStore, StoreError};

/// データベースファイルのパスを指定する環境変数
pub const LIFEGUARD_TINYDB_LOCATION: &str = "LIFEGUARD_TINYDB_LOCATION";

/// データベースファイルの既定パス
pub const DEFAULT_TINYDB_LOCATION: &str = "lifeguard.json";

/// ホストの設定マネージャーに公開する設定項目の説明
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDescriptor {
    pub name: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// 認識する設定項目の一覧
pub const SETTINGS: &[SettingDescriptor] = &[SettingDescriptor {
    name: LIFEGUARD_TINYDB_LOCATION,
    default: DEFAULT_TINYDB_LOCATION,
    description: "Path to database file",
}];

/// 名前から設定項目を検索
pub fn describe(name: &str) -> Option<&'static SettingDescriptor> {
    SETTINGS.iter().find(|setting| setting.name == name)
}

/// 解決済みの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// データベースファイルのパス（`~` は展開済み）
    pub tinydb_location: PathBuf,
}

impl Settings {
    /// 環境変数から設定を解決
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の取得関数から設定を解決（空文字列は未設定として扱う）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::resolve(None, lookup)
    }

    /// 明示的な指定、取得関数、既定値の順に解決
    ///
    /// 空白のみの値はどの段階でも未設定として扱う
    pub fn resolve(explicit: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let location = explicit
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
            .or_else(|| lookup(LIFEGUARD_TINYDB_LOCATION).filter(|value| !value.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_TINYDB_LOCATION.to_string());

        Self::with_location(&location)
    }

    pub fn with_location(location: &str) -> Self {
        let expanded = shellexpand::tilde(location);
        Self {
            tinydb_location: PathBuf::from(expanded.as_ref()),
        }
    }

    /// 設定されたパスのドキュメントストアを開く
    ///
    /// パスはこの時点で確定し、以降の環境変数の変更は開いたストアに影響しない
    pub fn open_store(&self) -> Result<Arc<DocumentStore>, StoreError> {
        DocumentStore::open(&self.tinydb_location)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_location(DEFAULT_TINYDB_LOCATION)
    }
}
