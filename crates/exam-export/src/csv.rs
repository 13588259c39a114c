//! Flat-file CSV writing.
//!
//! Header lines keep the legacy `", "`-joined form the downstream tooling
//! expects (`id, name` for departments); data rows are plain comma-joined
//! with RFC 4180 quoting, so a field containing a comma, quote, or newline
//! no longer corrupts the row boundary.

use std::fs;
use std::io;
use std::path::Path;

/// Quote one field per RFC 4180 when it contains a delimiter, quote, or
/// line break; pass it through untouched otherwise.
pub(crate) fn csv_quote(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Write one CSV file: the fixed header line, then one line per row.
pub(crate) fn write_csv(path: &Path, header: &str, rows: &[Vec<String>]) -> io::Result<()> {
    let mut out = String::with_capacity(rows.len() * 32 + header.len() + 1);
    out.push_str(header);
    out.push('\n');
    for row in rows {
        let quoted: Vec<String> = row.iter().map(|field| csv_quote(field)).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }
    fs::write(path, out)
}
