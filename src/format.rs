use std::io::Write;
use std::time::SystemTime;

use chrono::{DateTime, Local, SecondsFormat};

/// Synthetic row standing in for the rows dropped between head and tail.
/// Always `\n`-terminated, whatever the file itself uses.
pub fn ellipsis(skipped: usize) -> String {
    format!("... ({skipped} rows skipped)\n")
}

/// Append `lines` to `out`, each prefixed with `N: ` where N counts up from
/// `start`. Line bytes (terminator included) are copied verbatim.
pub fn number_lines(out: &mut Vec<u8>, lines: &[&[u8]], start: usize) {
    out.reserve(lines.iter().map(|l| l.len() + 8).sum());
    for (i, line) in lines.iter().enumerate() {
        let _ = write!(out, "{}: ", start + i);
        out.extend_from_slice(line);
    }
}

/// RFC 3339 in local time, second precision: `2024-05-01T09:30:00+02:00`
/// (`Z` when the local offset is zero).
pub fn timestamp(t: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(t);
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
