use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "domaintally",
    about = "Count customers per email domain in a delimited customer file",
    version,
    long_about = None
)]
pub struct Args {
    /// Customer file to import
    #[arg(default_value = "customers.csv")]
    pub input: PathBuf,

    /// Column separator
    #[arg(short, long, default_value_t = ',')]
    pub separator: char,

    /// Separator between the local part and the domain of an email
    #[arg(short, long, default_value_t = '@')]
    pub domain_separator: char,

    /// Keep only the text up to a second domain separator
    #[arg(long)]
    pub truncate_domain: bool,

    /// Number of domains with the most customers to display
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Redact domain names for privacy
    #[arg(long)]
    pub redact: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
