//! Delimited-text input.
//!
//! A plain comma split, header first. Quoted fields holding commas are not
//! supported; the game CSV this reads never writes them for player rows.

use serde_json::Value;

use crate::record::RawPlayerRecord;

/// Parse header + rows into raw records. Blank lines are skipped, short rows
/// are padded with `""`, surplus values are dropped.
pub fn parse_delimited(text: &str) -> Vec<RawPlayerRecord> {
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let header: Vec<String> = match lines.next() {
        Some(line) => line.split(',').map(|h| h.trim().to_string()).collect(),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let values: Vec<&str> = line.split(',').collect();
            let mut record = RawPlayerRecord::new();
            for (i, name) in header.iter().enumerate() {
                let value = values.get(i).map(|v| v.trim()).unwrap_or("");
                record.insert(name.clone(), Value::String(value.to_string()));
            }
            record
        })
        .collect()
}
