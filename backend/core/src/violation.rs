//! Structural violations reported by the validator.
//!
//! A validation pass never stops at the first problem: every violation found
//! is collected and reported, so a caller sees the full shape of what the
//! model got wrong in one round trip.

use serde::Serialize;
use std::fmt;

/// One structural problem found while validating a parsed model reply.
///
/// `field` values are dotted/indexed paths from the document root, e.g.
/// `items[2].price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The document root has the wrong overall shape.
    Structural { message: String },
    /// A required field is absent.
    MissingField { field: String },
    /// A field exists but holds the wrong kind of value.
    WrongType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
    /// An enumerated field holds a value outside its fixed set.
    InvalidEnum { field: String, value: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Structural { message } => write!(f, "{message}"),
            Violation::MissingField { field } => {
                write!(f, "missing required field `{field}`")
            }
            Violation::WrongType { field, expected, actual } => {
                write!(f, "field `{field}` must be {expected}, got {actual}")
            }
            Violation::InvalidEnum { field, value } => {
                write!(f, "field `{field}` holds invalid value {value:?}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let v = Violation::WrongType {
            field: "ingredients".into(),
            expected: "a list",
            actual: "a string",
        };
        assert_eq!(v.to_string(), "field `ingredients` must be a list, got a string");
    }

    #[test]
    fn enum_violation_quotes_the_value() {
        let v = Violation::InvalidEnum { field: "items[0].status".into(), value: "stolen".into() };
        assert_eq!(v.to_string(), "field `items[0].status` holds invalid value \"stolen\"");
    }
}
