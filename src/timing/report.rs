//! Plain-text timing summary: a fixed-width table, printed on demand and
//! optionally saved to a file. Not meant for machine parsing.

use std::fs::File;
use std::io::{self, Write};

use tracing::info;

use super::record::TimingRecord;

pub fn format_summary(record: &TimingRecord) -> String {
    let rows = [
        ("Insertion", record.insertion),
        ("Traversal (in-order)", record.traversal),
        ("Search", record.search),
        ("Search + deletion", record.deletion),
    ];

    let mut out = String::new();
    out.push_str("======== TIMING SUMMARY ========\n");
    out.push_str(&format!("| {:<25} | {:>12} |\n", "Operation", "Time (ms)"));
    out.push_str(&format!("|{:-<27}|{:-<14}|\n", "", ""));
    for (name, duration) in rows {
        out.push_str(&format!(
            "| {:<25} | {:>12.4} |\n",
            name,
            duration.as_secs_f64() * 1000.0
        ));
    }
    out
}

pub fn save_summary(record: &TimingRecord, path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(format_summary(record).as_bytes())?;
    info!(path, "timing summary saved");
    Ok(())
}
