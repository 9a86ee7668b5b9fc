//! Account email address.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reasons an input string is not a usable account email.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,

    #[error("email must be at most {max} characters")]
    TooLong { max: usize },

    #[error("email must contain an @ symbol")]
    MissingAtSymbol,

    #[error("email must contain a single @ symbol")]
    MultipleAtSymbols,

    #[error("email local part cannot be empty")]
    EmptyLocalPart,

    #[error("email domain cannot be empty")]
    EmptyDomain,

    #[error("email cannot contain whitespace")]
    ContainsWhitespace,
}

/// An email address in basic `local@domain` shape.
///
/// Only the shape is checked: one `@`, something on both sides, no
/// whitespace, at most 254 characters. Deliverability is the notifier's
/// problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(EmailError::ContainsWhitespace);
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAtSymbol)?;
        if domain.contains('@') {
            return Err(EmailError::MultipleAtSymbols);
        }
        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }
        if domain.is_empty() {
            return Err(EmailError::EmptyDomain);
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for input in ["test@test.com", "a@b", "user.name+tag@domain.co.uk"] {
            assert!(Email::parse(input).is_ok(), "{input} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("a"), Err(EmailError::MissingAtSymbol));
        assert_eq!(Email::parse("@test.com"), Err(EmailError::EmptyLocalPart));
        assert_eq!(Email::parse("test@"), Err(EmailError::EmptyDomain));
        assert_eq!(Email::parse("a@b@c"), Err(EmailError::MultipleAtSymbols));
        assert_eq!(Email::parse("te st@test.com"), Err(EmailError::ContainsWhitespace));
        assert_eq!(
            Email::parse(&format!("{}@test.com", "a".repeat(250))),
            Err(EmailError::TooLong { max: 254 })
        );
    }

    #[test]
    fn test_parts() {
        let email = Email::parse("test@example.com").unwrap();
        assert_eq!(email.local_part(), "test");
        assert_eq!(email.domain(), "example.com");
        assert_eq!(email.to_string(), "test@example.com");
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Email>("\"test@test.com\"").is_ok());
        assert!(serde_json::from_str::<Email>("\"not-an-email\"").is_err());
    }
}
