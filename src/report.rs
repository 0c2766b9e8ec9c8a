use serde::Serialize;
use std::io::{self, Write};

use crate::stats::{DomainCount, ImportSummary, SkipCounts};
use crate::utils::{format_number, redact_domain};
use crate::Args;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub top: Option<usize>,
    pub redact: bool,
    pub json: bool,
}

impl From<&Args> for ReportOptions {
    fn from(args: &Args) -> Self {
        Self {
            top: args.top,
            redact: args.redact,
            json: args.json,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    unique_domains: usize,
    domains: Vec<DomainCount>,
    skipped: &'a SkipCounts,
}

pub fn print_import_summary(summary: &ImportSummary, options: &ReportOptions) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_import_summary(&mut out, summary, options)?;
    out.flush()?;
    Ok(())
}

pub fn write_import_summary<W: Write>(
    out: &mut W,
    summary: &ImportSummary,
    options: &ReportOptions,
) -> anyhow::Result<()> {
    let selected: Vec<&DomainCount> = match options.top {
        Some(top) => summary.by_count().into_iter().take(top).collect(),
        None => summary.domains.iter().collect(),
    };

    let display = |stat: &DomainCount| {
        if options.redact {
            redact_domain(&stat.domain)
        } else {
            stat.domain.clone()
        }
    };

    if options.json {
        let report = JsonReport {
            unique_domains: summary.unique_domains(),
            domains: selected
                .iter()
                .map(|stat| DomainCount::new(display(*stat), stat.count))
                .collect(),
            skipped: &summary.skipped,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "There are {} unique email domains with the following number of customers associated for each:",
        format_number(summary.unique_domains() as u64)
    )?;

    if let Some(top) = options.top {
        writeln!(
            out,
            "Top {} domains by customers:",
            std::cmp::min(top, selected.len())
        )?;
    }

    for stat in &selected {
        writeln!(out, "{} {}", display(*stat), format_number(u64::from(stat.count)))?;
    }

    let skipped = &summary.skipped;
    if skipped.invalid_records + skipped.invalid_emails > 0 {
        writeln!(
            out,
            "Skipped {} malformed records and {} invalid email addresses",
            format_number(u64::from(skipped.invalid_records)),
            format_number(u64::from(skipped.invalid_emails))
        )?;
    }

    Ok(())
}
