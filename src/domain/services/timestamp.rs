//! # Timestamp Codec
//!
//! `last_execution` / `last_notification` の永続化表現
//!
//! 保存形式は `"YYYY-MM-DD HH:MM"`（24時間表記、ゼロ埋め、タイムゾーンなし、秒なし）。
//! 既存のデータベースファイルとの互換性のため、この形式は変更しないこと。
//! 秒以下の精度は保存時に失われる。

use chrono::NaiveDateTime;
use thiserror::Error;

/// 保存形式のフォーマット文字列
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// タイムスタンプ文字列の解析エラー
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("invalid timestamp {value:?}: {source}")]
    Parse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timestamp {value:?} is not in \"YYYY-MM-DD HH:MM\" form")]
    NonCanonical { value: String },
}

/// タイムスタンプを保存形式の文字列に変換
///
/// 秒とナノ秒は切り捨てられる。
///
/// ```
/// use chrono::NaiveDate;
/// use lifeguard_tinydb::domain::services::timestamp::format_timestamp;
///
/// let at = NaiveDate::from_ymd_opt(2020, 11, 19)
///     .unwrap()
///     .and_hms_opt(7, 5, 42)
///     .unwrap();
/// assert_eq!(format_timestamp(&at), "2020-11-19 07:05");
/// ```
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// 保存形式の文字列をタイムスタンプに変換
///
/// `format_timestamp` が出力する形式のみ受け付ける。
/// 秒やタイムゾーン付き、ゼロ埋めされていない値はエラーになる。
///
/// # Errors
///
/// 形式が一致しない場合に `TimestampError` を返す
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let parsed =
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
            TimestampError::Parse {
                value: value.to_string(),
                source,
            }
        })?;

    // chrono accepts unpadded fields, so compare against the canonical rendering
    if format_timestamp(&parsed) != value {
        return Err(TimestampError::NonCanonical {
            value: value.to_string(),
        });
    }

    Ok(parsed)
}

/// `Option` 版の `format_timestamp`（None は null として保存される）
pub fn format_optional(at: Option<&NaiveDateTime>) -> Option<String> {
    at.map(format_timestamp)
}

/// `Option` 版の `parse_timestamp`（欠落・null は None）
pub fn parse_optional(value: Option<&str>) -> Result<Option<NaiveDateTime>, TimestampError> {
    value.map(parse_timestamp).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_format_zero_pads_fields() {
        assert_eq!(format_timestamp(&at(2021, 1, 2, 3, 4, 0)), "2021-01-02 03:04");
    }

    #[test]
    fn test_format_drops_seconds() {
        assert_eq!(format_timestamp(&at(2020, 12, 31, 23, 59, 59)), "2020-12-31 23:59");
    }

    #[test]
    fn test_parse_valid() {
        let parsed = parse_timestamp("2020-11-19 00:00").unwrap();
        assert_eq!(parsed, at(2020, 11, 19, 0, 0, 0));
    }

    #[test]
    fn test_parse_rejects_seconds() {
        let result = parse_timestamp("2020-11-19 00:00:30");
        assert!(matches!(result, Err(TimestampError::Parse { .. })));
    }

    #[test]
    fn test_parse_rejects_iso_form() {
        assert!(parse_timestamp("2020-11-19T00:00").is_err());
    }

    #[test]
    fn test_parse_rejects_unpadded() {
        let result = parse_timestamp("2020-1-9 0:05");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_round_trip_is_minute_precision() {
        let original = at(2020, 11, 19, 14, 30, 45);
        let restored = parse_timestamp(&format_timestamp(&original)).unwrap();

        assert_eq!(restored, at(2020, 11, 19, 14, 30, 0));
    }

    #[test]
    fn test_optional_helpers() {
        assert_eq!(format_optional(None), None);
        assert_eq!(parse_optional(None).unwrap(), None);
        assert_eq!(
            parse_optional(Some("2020-12-31 00:00")).unwrap(),
            Some(at(2020, 12, 31, 0, 0, 0))
        );
        assert!(parse_optional(Some("not a date")).is_err());
    }
}
