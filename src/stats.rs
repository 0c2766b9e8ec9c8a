use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: u32,
}

impl DomainCount {
    pub fn new(domain: impl Into<String>, count: u32) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}

/// Running customer count per email domain for one import.
#[derive(Debug, Default)]
pub struct DomainTally {
    counts: HashMap<String, u32>,
}

impl DomainTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, domain: &str) {
        match self.counts.get_mut(domain) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(domain.to_string(), 1);
            }
        }
    }

    pub fn unique_domains(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&count| u64::from(count)).sum()
    }

    /// Consumes the tally, returning counts ordered by domain (byte order).
    pub fn into_sorted(self) -> Vec<DomainCount> {
        let mut sorted: Vec<DomainCount> = self
            .counts
            .into_iter()
            .map(|(domain, count)| DomainCount { domain, count })
            .collect();
        sorted.sort_unstable_by(|a, b| a.domain.cmp(&b.domain));
        sorted
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub blank_lines: u32,
    pub invalid_records: u32,
    pub invalid_emails: u32,
}

impl SkipCounts {
    pub fn total(&self) -> u32 {
        self.blank_lines + self.invalid_records + self.invalid_emails
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub lines_read: usize,
    pub skipped: SkipCounts,
    pub domains: Vec<DomainCount>,
}

impl ImportSummary {
    pub fn unique_domains(&self) -> usize {
        self.domains.len()
    }

    pub fn customers_counted(&self) -> u64 {
        self.domains.iter().map(|d| u64::from(d.count)).sum()
    }

    /// Domains ordered by customer count, highest first. Ties keep domain order.
    pub fn by_count(&self) -> Vec<&DomainCount> {
        let mut ranked: Vec<&DomainCount> = self.domains.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_inserts_then_increments() {
        let mut tally = DomainTally::new();
        tally.record("gmail.com");
        tally.record("gmail.com");
        tally.record("abc.com");

        assert_eq!(tally.unique_domains(), 2);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn sorts_alphabetically_by_domain() {
        let mut tally = DomainTally::new();
        for domain in ["gmail.com", "abc.com", "gmail.com", "Zeta.org", "abc.co"] {
            tally.record(domain);
        }

        assert_eq!(
            tally.into_sorted(),
            vec![
                DomainCount::new("Zeta.org", 1),
                DomainCount::new("abc.co", 1),
                DomainCount::new("abc.com", 1),
                DomainCount::new("gmail.com", 2),
            ]
        );
    }

    #[test]
    fn empty_tally_sorts_to_nothing() {
        assert!(DomainTally::new().into_sorted().is_empty());
    }

    #[test]
    fn by_count_ranks_highest_first() {
        let summary = ImportSummary {
            lines_read: 6,
            skipped: SkipCounts::default(),
            domains: vec![
                DomainCount::new("a.com", 1),
                DomainCount::new("b.com", 3),
                DomainCount::new("c.com", 1),
                DomainCount::new("d.com", 1),
            ],
        };

        let ranked: Vec<&str> = summary.by_count().iter().map(|d| d.domain.as_str()).collect();
        assert_eq!(ranked, vec!["b.com", "a.com", "c.com", "d.com"]);
        assert_eq!(summary.customers_counted(), 6);
    }
}
