#![allow(missing_docs)]

mod common;

use common::{MEMINFO, STAT, render};
use procrows::{LineScanner, RowSet, ScanOptions};

fn rows_of(buffer: &[u8]) -> RowSet {
    let mut rows = RowSet::new();
    LineScanner::new(ScanOptions::default())
        .scan(buffer)
        .expect("scan")
        .deliver(&mut rows)
        .expect("deliver");
    rows
}

#[test]
fn snapshot_meminfo_rows() {
    let rows = rows_of(MEMINFO);
    insta::assert_snapshot!(render(&rows), @r"
    1 | MemTotal:       16318412 kB
    2 | MemFree:         1203456 kB
    3 | MemAvailable:    9876543 kB
    4 | Buffers:          345678 kB
    ");
    insta::assert_debug_snapshot!(rows.statistics(), @r"
    ScanStatistics {
        total_chars: 112,
        line_count: 4,
        max_line_length: 27,
        first_terminator_offset: Some(
            27,
        ),
    }
    ");
}

#[test]
fn snapshot_stat_rows_drop_unterminated_tail() {
    let rows = rows_of(STAT);
    insta::assert_snapshot!(render(&rows), @r"
    1 | cpu  4705 356 584 3699 23 23 0 0 0 0
    2 | cpu0 1393280 32966 572056 13343292 6130 0 17875 0 0 0
    3 | intr 114930548 113199788 3 0 5 263 0 4 [... 2 more]
    4 | ctxt 1990473
    ");
    insta::assert_debug_snapshot!(rows.statistics(), @r"
    ScanStatistics {
        total_chars: 172,
        line_count: 4,
        max_line_length: 53,
        first_terminator_offset: Some(
            36,
        ),
    }
    ");
}

#[test]
fn snapshot_line_too_long_message() {
    let scanner = LineScanner::new(ScanOptions {
        max_line_length: 16,
        ..Default::default()
    });
    let err = scanner.scan(STAT).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"line 1 larger than 16 bytes");
}

#[test]
fn snapshot_records_debug() {
    let scan = LineScanner::new(ScanOptions::default())
        .scan(b"a\n\nb c\n")
        .unwrap();
    insta::assert_debug_snapshot!(scan.records, @r#"
    [
        LineRecord {
            line_number: 1,
            content: "a",
        },
        LineRecord {
            line_number: 2,
            content: "",
        },
        LineRecord {
            line_number: 3,
            content: "b c",
        },
    ]
    "#);
}
