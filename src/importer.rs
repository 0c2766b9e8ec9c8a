use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::ImportConfig;
use crate::error::{ImportError, RecordError, Result};
use crate::record::CustomerRecord;
use crate::stats::{DomainTally, ImportSummary, SkipCounts};

/// Imports a customer file line by line and counts customers per email domain.
///
/// The file is read through a buffered reader, so memory use is bounded by the
/// longest line rather than the size of the file.
pub fn import_path(path: &Path, config: &ImportConfig) -> Result<ImportSummary> {
    info!(action = "open", component = "importer", file_path = ?path, "Opening customer file");

    let file = File::open(path).map_err(|source| ImportError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    import_reader(BufReader::new(file), config)
}

/// Runs the import over any buffered source. Malformed lines are skipped, a
/// failing read aborts the run.
pub fn import_reader<R: BufRead>(reader: R, config: &ImportConfig) -> Result<ImportSummary> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "domain_extraction",
        column_separator = %config.column_separator,
        domain_separator = %config.domain_separator,
        "Starting email domain extraction"
    );

    let mut tally = DomainTally::new();
    let mut skipped = SkipCounts::default();
    let mut lines_read = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| ImportError::SourceReadError {
            line: line_number,
            source,
        })?;
        lines_read = line_number;

        if line.trim().is_empty() {
            skipped.blank_lines += 1;
            continue;
        }

        match extract_domain(&line, config) {
            Ok(domain) => tally.record(domain),
            Err(e) => {
                match e {
                    RecordError::InvalidRecordShape { .. } => skipped.invalid_records += 1,
                    RecordError::InvalidEmailFormat { .. } => skipped.invalid_emails += 1,
                }
                debug!(action = "skip", component = "record_parser", line_number, error = %e, "Skipping line");
            }
        }
    }

    let unique_domains = tally.unique_domains();
    let summary = ImportSummary {
        lines_read,
        skipped,
        domains: tally.into_sorted(),
    };

    info!(
        action = "complete",
        component = "domain_extraction",
        lines_read,
        unique_domains,
        lines_skipped = skipped.total(),
        duration_ms = start_time.elapsed().as_millis(),
        "Domain extraction completed"
    );

    Ok(summary)
}

fn extract_domain<'a>(line: &'a str, config: &ImportConfig) -> std::result::Result<&'a str, RecordError> {
    CustomerRecord::parse(line, config.column_separator)?
        .email_domain(config.domain_separator, config.domain_split)
}
