#![allow(dead_code)]

/// `/proc/meminfo`-shaped content; every line terminated.
pub const MEMINFO: &[u8] = b"MemTotal:       16318412 kB
MemFree:         1203456 kB
MemAvailable:    9876543 kB
Buffers:          345678 kB
";

/// `/proc/stat`-shaped content whose last line has no terminator.
pub const STAT: &[u8] = b"cpu  4705 356 584 3699 23 23 0 0 0 0
cpu0 1393280 32966 572056 13343292 6130 0 17875 0 0 0
intr 114930548 113199788 3 0 5 263 0 4 [... 2 more]
ctxt 1990473
btime 1062191376";

pub fn render(rows: &procrows::RowSet) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for row in rows.rows() {
        writeln!(out, "{} | {}", row.lineno, row.data).unwrap();
    }
    out
}
