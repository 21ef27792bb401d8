use thiserror::Error;

use crate::TournamentRecord;

/// A listing line that could not be parsed into a [`TournamentRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct LineError {
    /// 1-based line number within the document.
    pub line: usize,
    pub message: String,
}

/// Outcome of ingesting one listing document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Live tournaments, in document order.
    pub records: Vec<TournamentRecord>,
    /// Parsed records dropped because no round was ongoing.
    pub skipped_not_live: usize,
    pub rejected: Vec<LineError>,
}

/// Parse a newline-delimited JSON listing.
///
/// Every line is parsed on its own; a malformed line is reported in
/// [`IngestReport::rejected`] and does not affect its neighbours. Blank lines
/// (including the trailing one) are ignored.
pub fn ingest(doc: &str) -> IngestReport {
    let mut report = IngestReport::default();

    for (index, raw) in doc.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<TournamentRecord>(line) {
            Ok(record) if record.is_live() => report.records.push(record),
            Ok(_) => report.skipped_not_live += 1,
            Err(err) => report.rejected.push(LineError {
                line: index + 1,
                message: err.to_string(),
            }),
        }
    }

    report
}
