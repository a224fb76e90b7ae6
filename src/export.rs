//! CSV export of processing results.
//!
//! Three result views are written as UTF-8 CSV with a header row: the full
//! per-document view with every pipeline checkpoint, a compact summary view
//! (label + final text), and the word frequency table. Token list columns
//! are joined with single spaces for display.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::document::ProcessedDocument;
use crate::error::{Result, SapuError};
use crate::frequency::WordCount;

/// Header of the full result view.
const FULL_HEADERS: &[&str] = &[
    "id",
    "original_text",
    "clean_text",
    "initial_tokens",
    "filtered_tokens",
    "final_tokens",
    "final_text",
    "final_token_count",
];

/// Write the full result view: one row per document with every pipeline
/// checkpoint.
///
/// Documents with missing text export an empty `original_text` cell and
/// empty checkpoint columns.
pub fn write_full_results<W: Write>(writer: W, results: &[ProcessedDocument]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(FULL_HEADERS)?;

    for result in results {
        let artifacts = &result.artifacts;
        csv_writer.write_record([
            result.id.as_str(),
            result.text.as_deref().unwrap_or(""),
            artifacts.clean_text.as_str(),
            &artifacts.initial_tokens.join(" "),
            &artifacts.filtered_tokens.join(" "),
            &artifacts.final_tokens.join(" "),
            artifacts.final_text.as_str(),
            &result.final_token_count.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the full result view to a file.
pub fn save_full_results<P: AsRef<Path>>(path: P, results: &[ProcessedDocument]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_full_results(file, results)
}

/// The full result view as in-memory CSV bytes.
pub fn results_to_csv_bytes(results: &[ProcessedDocument]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_full_results(&mut buffer, results)?;
    Ok(buffer)
}

/// Write the summary view: one caller-labeled column plus the final text.
///
/// `label_header` names the first column (typically the comment author).
pub fn write_summary_results<W: Write>(
    writer: W,
    label_header: &str,
    rows: &[(String, String)],
) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record([label_header, "final_text"])?;

    for (label, final_text) in rows {
        csv_writer.write_record([label.as_str(), final_text.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a word frequency table as `word,count` rows.
pub fn write_frequency_table<W: Write>(writer: W, table: &[WordCount]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(["word", "count"])?;

    for row in table {
        csv_writer.write_record([row.word.as_str(), &row.count.to_string()])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Parse CSV bytes back into (header, rows) for inspection.
///
/// Used by tests and by callers that want to re-read an export they just
/// produced in memory.
pub fn read_csv_bytes(bytes: &[u8]) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| SapuError::other(format!("failed to read export headers: {e}")))?
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok((headers, rows))
}
