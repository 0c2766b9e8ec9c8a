use crate::args::Args;

pub const DEFAULT_COLUMN_SEPARATOR: char = ',';
pub const DEFAULT_DOMAIN_SEPARATOR: char = '@';

/// How the email field is split when the domain separator occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainSplit {
    /// Everything after the first separator is the domain (`a@b@c` -> `b@c`).
    #[default]
    FirstSeparator,
    /// Only the text between the first and second separator (`a@b@c` -> `b`).
    Truncate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportConfig {
    pub column_separator: char,
    pub domain_separator: char,
    pub domain_split: DomainSplit,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            column_separator: DEFAULT_COLUMN_SEPARATOR,
            domain_separator: DEFAULT_DOMAIN_SEPARATOR,
            domain_split: DomainSplit::default(),
        }
    }
}

impl From<&Args> for ImportConfig {
    fn from(args: &Args) -> Self {
        Self {
            column_separator: args.separator,
            domain_separator: args.domain_separator,
            domain_split: if args.truncate_domain {
                DomainSplit::Truncate
            } else {
                DomainSplit::FirstSeparator
            },
        }
    }
}
