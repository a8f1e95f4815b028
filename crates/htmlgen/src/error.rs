//! Error types for htmlgen

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No text argument was available to serve as the element name
    MissingName,
    /// An attribute that the rule table requires to be boolean was built as a string
    ExpectedBoolean { name: String },
    /// An attribute that the rule table requires to be a string was built as a boolean
    ExpectedString { name: String },
    /// An enumerated attribute carried a value outside its legal set
    ValueNotInEnum {
        name: String,
        value: String,
        allowed: &'static [&'static str],
    },
    /// A void element was rendered with a non-empty child list
    VoidWithChildren { name: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "no element name was set"),
            Self::ExpectedBoolean { name } => {
                write!(f, "attribute \"{name}\" must be a boolean attribute")
            }
            Self::ExpectedString { name } => {
                write!(f, "attribute \"{name}\" must be a string attribute")
            }
            Self::ValueNotInEnum {
                name,
                value,
                allowed,
            } => {
                write!(
                    f,
                    "attribute \"{name}\" must be one of [{}], got \"{value}\"",
                    allowed.join(", ")
                )
            }
            Self::VoidWithChildren { name } => {
                write!(f, "element \"{name}\" is self-closing and cannot have children")
            }
        }
    }
}

/// Main error type for htmlgen
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error reports an invalid attribute, whatever the
    /// specific rule that rejected it
    pub fn is_invalid_attribute(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ExpectedBoolean { .. }
                | ErrorKind::ExpectedString { .. }
                | ErrorKind::ValueNotInEnum { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Result type alias for htmlgen
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::MissingName);
        assert_eq!(err.kind(), &ErrorKind::MissingName);
        assert_eq!(err.message(), "no element name was set");
    }

    #[test]
    fn test_enum_error_display() {
        let err = Error::new(ErrorKind::ValueNotInEnum {
            name: "dir".to_string(),
            value: "up".to_string(),
            allowed: &["ltr", "rtl", "auto"],
        });
        let display = err.to_string();
        assert!(display.contains("\"dir\""));
        assert!(display.contains("[ltr, rtl, auto]"));
        assert!(display.contains("\"up\""));
    }

    #[test]
    fn test_invalid_attribute_classification() {
        let err = Error::new(ErrorKind::ExpectedBoolean {
            name: "hidden".to_string(),
        });
        assert!(err.is_invalid_attribute());

        let err = Error::new(ErrorKind::VoidWithChildren {
            name: "img".to_string(),
        });
        assert!(!err.is_invalid_attribute());
    }
}
