use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}

pub fn redact_domain(domain: &str) -> String {
    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() <= 1 {
        return "*".repeat(domain.len());
    }

    if parts[parts.len() - 2].len() <= 3 {
        return format!("???.{}", parts[parts.len() - 1]);
    }

    let redacted_parts: Vec<String> = parts[..parts.len() - 1]
        .iter()
        .map(|part| "*".repeat(part.len()))
        .collect();

    let mut result = redacted_parts.join(".");
    result.push('.');
    result.push_str(parts[parts.len() - 1]);
    result
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("--top must be greater than 0");
        }
    }

    if args.separator == args.domain_separator {
        anyhow::bail!(
            "--separator and --domain-separator must differ (both are '{}')",
            args.separator
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn formats_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn redacts_domains() {
        assert_eq!(redact_domain("gmail.com"), "*****.com");
        assert_eq!(redact_domain("abc.com"), "???.com");
        assert_eq!(redact_domain("mail.example.org"), "****.*******.org");
        assert_eq!(redact_domain("localhost"), "*********");
    }

    #[test]
    fn rejects_zero_top() {
        let args = crate::args::Args::parse_from(["domaintally", "--top", "0"]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn rejects_matching_separators() {
        let args = crate::args::Args::parse_from(["domaintally", "-s", "@"]);
        assert!(validate_args(&args).is_err());

        let args = crate::args::Args::parse_from(["domaintally", "--top", "3"]);
        assert!(validate_args(&args).is_ok());
    }
}
