pub mod args;
pub mod config;
pub mod error;
pub mod importer;
pub mod record;
pub mod report;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use config::{DomainSplit, ImportConfig};
pub use error::{ImportError, RecordError};
pub use importer::{import_path, import_reader};
pub use stats::{DomainCount, ImportSummary};
