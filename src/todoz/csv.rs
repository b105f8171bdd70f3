//! # CSV Codec
//!
//! Turns a [`Collection`] into a spreadsheet-importable document:
//!
//! ```text
//! ID,タイトル,完了状態,作成日時,更新日時
//! "k3x9…","買い物に行く","未完了","2025-01-28 10:00:00","2025-01-28 10:00:00"
//! ```
//!
//! - The header is bare; every data field is wrapped in double quotes.
//! - A `"` inside a value is doubled. Nothing else is escaped: commas and
//!   newlines stay literal inside the quoted field.
//! - Completion renders as `完了` / `未完了`.
//! - Timestamps render as `YYYY-MM-DD HH:MM:SS` in UTC, truncated to seconds.
//! - Lines are joined with `\n` and there is no trailing newline.
//!
//! The codec emits plain UTF-8 with no byte-order mark. Adding one is the
//! download sink's business (see [`crate::export::FileDownload`]).

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::model::{Collection, Item};

pub const CSV_HEADERS: [&str; 5] = ["ID", "タイトル", "完了状態", "作成日時", "更新日時"];
pub const COMPLETED_LABEL: &str = "完了";
pub const ACTIVE_LABEL: &str = "未完了";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn to_csv(collection: &Collection) -> String {
    let mut lines = Vec::with_capacity(collection.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(collection.iter().map(item_row));
    lines.join("\n")
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn generate_filename() -> String {
    generate_filename_with(&SystemClock)
}

pub fn generate_filename_with(clock: &dyn Clock) -> String {
    format!("todos_{}.csv", clock.now().format("%Y-%m-%d"))
}

fn item_row(item: &Item) -> String {
    let status = if item.completed {
        COMPLETED_LABEL
    } else {
        ACTIVE_LABEL
    };
    [
        quote(&item.id),
        quote(&item.title),
        quote(status),
        quote(&format_timestamp(&item.created_at)),
        quote(&format_timestamp(&item.updated_at)),
    ]
    .join(",")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::lifecycle;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        FixedClock::parse(rfc3339).unwrap().0
    }

    fn item(id: &str, title: &str, completed: bool, created: &str, updated: &str) -> Item {
        Item {
            id: id.into(),
            title: title.into(),
            completed,
            created_at: at(created),
            updated_at: at(updated),
        }
    }

    fn fixture() -> Collection {
        Collection::try_from_items(vec![
            item(
                "test-id-1",
                "買い物に行く",
                false,
                "2025-01-28T10:00:00.000Z",
                "2025-01-28T10:00:00.000Z",
            ),
            item(
                "test-id-2",
                "特殊文字\"テスト",
                true,
                "2025-01-28T11:00:00.000Z",
                "2025-01-28T12:00:00.000Z",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn formats_timestamp_without_fraction_or_zone() {
        assert_eq!(
            format_timestamp(&at("2025-01-28T15:30:45.123Z")),
            "2025-01-28 15:30:45"
        );
    }

    #[test]
    fn timestamp_is_rendered_in_utc() {
        assert_eq!(
            format_timestamp(&at("2025-01-28T09:30:45.999+09:00")),
            "2025-01-28 00:30:45"
        );
    }

    #[test]
    fn converts_collection_line_by_line() {
        let csv = to_csv(&fixture());
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,タイトル,完了状態,作成日時,更新日時");
        assert_eq!(
            lines[1],
            r#""test-id-1","買い物に行く","未完了","2025-01-28 10:00:00","2025-01-28 10:00:00""#
        );
        assert_eq!(
            lines[2],
            r#""test-id-2","特殊文字""テスト","完了","2025-01-28 11:00:00","2025-01-28 12:00:00""#
        );
    }

    #[test]
    fn empty_collection_is_header_only() {
        assert_eq!(to_csv(&Collection::new()), "ID,タイトル,完了状態,作成日時,更新日時");
    }

    #[test]
    fn no_trailing_newline() {
        assert!(!to_csv(&fixture()).ends_with('\n'));
    }

    #[test]
    fn doubles_every_quote() {
        let c = Collection::try_from_items(vec![lifecycle::create(
            "タイトルに\"ダブルクォート\"が含まれる",
        )])
        .unwrap();
        assert!(to_csv(&c).contains(r#""タイトルに""ダブルクォート""が含まれる""#));
    }

    #[test]
    fn commas_and_newlines_stay_literal() {
        let c = Collection::try_from_items(vec![item(
            "x",
            "a,b\nc",
            false,
            "2025-01-28T10:00:00Z",
            "2025-01-28T10:00:00Z",
        )])
        .unwrap();
        assert!(to_csv(&c).contains("\"a,b\nc\""));
    }

    #[test]
    fn status_labels() {
        let done = Item {
            completed: true,
            ..lifecycle::create("完了済み")
        };
        let open = lifecycle::create("未完了");
        let csv = to_csv(&Collection::try_from_items(vec![done, open]).unwrap());
        assert!(csv.contains("\"完了\""));
        assert!(csv.contains("\"未完了\""));
        assert!(!csv.contains("true") && !csv.contains("false"));
    }

    #[test]
    fn filename_uses_clock_date() {
        let clock = FixedClock::parse("2025-01-28T23:59:59.999Z").unwrap();
        assert_eq!(generate_filename_with(&clock), "todos_2025-01-28.csv");
    }

    #[test]
    fn filename_shape() {
        let name = generate_filename();
        let date = name
            .strip_prefix("todos_")
            .and_then(|rest| rest.strip_suffix(".csv"))
            .unwrap();
        let bytes = date.as_bytes();
        assert_eq!(bytes.len(), 10);
        for (i, b) in bytes.iter().enumerate() {
            if i == 4 || i == 7 {
                assert_eq!(*b, b'-');
            } else {
                assert!(b.is_ascii_digit());
            }
        }
    }
}
