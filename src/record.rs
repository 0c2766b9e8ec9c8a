use crate::config::DomainSplit;
use crate::error::RecordError;

pub const FIELD_COUNT: usize = 5;

/// One customer line, borrowed from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerRecord<'a> {
    pub forename: &'a str,
    pub surname: &'a str,
    pub email: &'a str,
    pub gender: &'a str,
    pub ip_address: &'a str,
}

impl<'a> CustomerRecord<'a> {
    /// Splits a line into the five customer fields. Fields past the fifth are ignored.
    pub fn parse(line: &'a str, separator: char) -> Result<Self, RecordError> {
        let mut fields = line.split(separator);

        match (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) {
            (Some(forename), Some(surname), Some(email), Some(gender), Some(ip_address)) => {
                Ok(Self {
                    forename,
                    surname,
                    email,
                    gender,
                    ip_address,
                })
            }
            _ => Err(RecordError::InvalidRecordShape {
                found: line.split(separator).count(),
                expected: FIELD_COUNT,
            }),
        }
    }

    /// Returns the domain part of the email address.
    pub fn email_domain(&self, separator: char, split: DomainSplit) -> Result<&'a str, RecordError> {
        email_domain(self.email, separator, split)
    }
}

pub fn email_domain(email: &str, separator: char, split: DomainSplit) -> Result<&str, RecordError> {
    let domain = email.split_once(separator).map(|(_, rest)| match split {
        DomainSplit::FirstSeparator => rest,
        DomainSplit::Truncate => rest.split(separator).next().unwrap_or(rest),
    });

    match domain {
        Some(domain) if !domain.is_empty() => Ok(domain),
        _ => Err(RecordError::InvalidEmailFormat {
            email: email.to_string(),
            separator,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_five_fields() {
        let record =
            CustomerRecord::parse("Joe,Bloggs,j.bloggs@gmail.com,male,192.168.0.1", ',').unwrap();
        assert_eq!(record.forename, "Joe");
        assert_eq!(record.surname, "Bloggs");
        assert_eq!(record.email, "j.bloggs@gmail.com");
        assert_eq!(record.gender, "male");
        assert_eq!(record.ip_address, "192.168.0.1");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let record = CustomerRecord::parse("a,b,c@d.com,e,f,g,h", ',').unwrap();
        assert_eq!(record.ip_address, "f");
    }

    #[test]
    fn four_fields_is_invalid_shape() {
        assert_eq!(
            CustomerRecord::parse("Bad,Row,bademail,male", ','),
            Err(RecordError::InvalidRecordShape {
                found: 4,
                expected: FIELD_COUNT
            })
        );
    }

    #[test]
    fn respects_custom_separator() {
        let record = CustomerRecord::parse("Joe;Bloggs;joe@abc.com;male;1.1.1.1", ';').unwrap();
        assert_eq!(record.email, "joe@abc.com");
        assert!(CustomerRecord::parse("Joe,Bloggs,joe@abc.com,male,1.1.1.1", ';').is_err());
    }

    #[test]
    fn extracts_domain() {
        let record =
            CustomerRecord::parse("Joe,Bloggs,j.bloggs@gmail.com,male,192.168.0.1", ',').unwrap();
        assert_eq!(
            record.email_domain('@', DomainSplit::FirstSeparator),
            Ok("gmail.com")
        );
    }

    #[test]
    fn missing_separator_is_invalid_email() {
        let err = email_domain("j.bloggsgmail.com", '@', DomainSplit::FirstSeparator).unwrap_err();
        assert!(matches!(err, RecordError::InvalidEmailFormat { .. }));
    }

    #[test]
    fn empty_domain_is_invalid_email() {
        assert!(email_domain("joe@", '@', DomainSplit::FirstSeparator).is_err());
        assert!(email_domain("joe@@x.com", '@', DomainSplit::Truncate).is_err());
    }

    #[test]
    fn multiple_separators() {
        assert_eq!(
            email_domain("a@b@c", '@', DomainSplit::FirstSeparator),
            Ok("b@c")
        );
        assert_eq!(email_domain("a@b@c", '@', DomainSplit::Truncate), Ok("b"));
    }
}
