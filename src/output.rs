//! Persistence of extracted entries: pretty-printed JSON and a flat
//! three-column CSV.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;

use crate::pipeline::segment::Entry;

const CSV_HEADER: &str = "word_number,word,description";

pub fn save_json(entries: &[Entry], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), entries)?;
    Ok(())
}

pub fn save_csv(entries: &[Entry], path: &Path) -> Result<()> {
    fs::write(path, to_csv(entries))?;
    Ok(())
}

fn to_csv(entries: &[Entry]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&csv_field(&entry.word_number));
        out.push(',');
        out.push_str(&csv_field(&entry.word));
        out.push(',');
        out.push_str(&csv_field(&entry.description));
        out.push('\n');
    }
    out
}

/// Quote a field when it embeds a comma, quote, or line break.
/// Descriptions routinely contain all three.
fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ── Tests ──
