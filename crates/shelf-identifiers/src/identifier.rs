//! Typed identifier values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify::identify;
use crate::convert::{isbn13_to_10, to_isbn13, upc_to_isbn13};
use crate::error::IdentifierError;
use crate::format::format_isbn;
use crate::normalize::{normalize_isbn, normalize_lccn};

/// Kinds of book barcode identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum IdentifierKind {
    /// 10-character ISBN, mod-11 check digit
    Isbn10,
    /// 978/979-prefixed EAN-13
    Isbn13,
    /// Any other EAN-13
    Ean13,
    /// 12-digit UPC-A
    UpcA,
    /// Library of Congress Control Number
    Lccn,
}

impl IdentifierKind {
    /// Get all identifier kinds
    pub fn all() -> &'static [IdentifierKind] {
        &[
            IdentifierKind::Isbn10,
            IdentifierKind::Isbn13,
            IdentifierKind::Ean13,
            IdentifierKind::UpcA,
            IdentifierKind::Lccn,
        ]
    }

    /// Whether this kind is an ISBN (10 or 13)
    pub fn is_isbn(self) -> bool {
        matches!(self, IdentifierKind::Isbn10 | IdentifierKind::Isbn13)
    }

    /// Human-readable label, e.g. "ISBN-13"
    pub fn label(self) -> &'static str {
        match self {
            IdentifierKind::Isbn10 => "ISBN-10",
            IdentifierKind::Isbn13 => "ISBN-13",
            IdentifierKind::Ean13 => "EAN-13",
            IdentifierKind::UpcA => "UPC-A",
            IdentifierKind::Lccn => "LCCN",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified, normalized identifier with its ISBN equivalents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Identifier {
    pub kind: IdentifierKind,
    /// Normalized value; ISBN-10 check digits are uppercased, LCCNs lowercased
    pub value: String,
    pub isbn13: Option<String>,
    pub isbn10: Option<String>,
}

impl Identifier {
    /// Classify and normalize a raw code.
    ///
    /// ```
    /// use shelf_identifiers::{Identifier, IdentifierKind};
    /// let id = Identifier::parse("0-8044-2957-x").unwrap();
    /// assert_eq!(id.kind, IdentifierKind::Isbn10);
    /// assert_eq!(id.value, "080442957X");
    /// assert_eq!(id.isbn13.as_deref(), Some("9780804429573"));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let normalized = normalize_isbn(raw);
        if normalized.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let Some(kind) = identify(&normalized) else {
            tracing::debug!(input = raw, "unrecognized identifier");
            return Err(IdentifierError::Unrecognized {
                input: raw.to_string(),
            });
        };

        let identifier = match kind {
            IdentifierKind::Isbn10 => {
                let value = normalized.to_ascii_uppercase();
                Identifier {
                    kind,
                    isbn13: to_isbn13(&value),
                    isbn10: Some(value.clone()),
                    value,
                }
            }
            IdentifierKind::Isbn13 => Identifier {
                kind,
                isbn13: Some(normalized.clone()),
                isbn10: isbn13_to_10(&normalized),
                value: normalized,
            },
            IdentifierKind::Ean13 => Identifier {
                kind,
                value: normalized,
                isbn13: None,
                isbn10: None,
            },
            IdentifierKind::UpcA => {
                let isbn13 = upc_to_isbn13(&normalized);
                let isbn10 = isbn13.as_deref().and_then(isbn13_to_10);
                Identifier {
                    kind,
                    value: normalized,
                    isbn13,
                    isbn10,
                }
            }
            IdentifierKind::Lccn => Identifier {
                kind,
                value: normalize_lccn(raw),
                isbn13: None,
                isbn10: None,
            },
        };

        Ok(identifier)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_isbn() {
            f.write_str(&format_isbn(&self.value))
        } else {
            f.write_str(&self.value)
        }
    }
}

/// Parse a raw code into an [`Identifier`]; free-function form for FFI callers.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_identifier(raw: &str) -> Result<Identifier, IdentifierError> {
    Identifier::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_isbn10() {
        let id = Identifier::parse("0-306-40615-2").unwrap();
        assert_eq!(id.kind, IdentifierKind::Isbn10);
        assert_eq!(id.value, "0306406152");
        assert_eq!(id.isbn10.as_deref(), Some("0306406152"));
        assert_eq!(id.isbn13.as_deref(), Some("9780306406157"));
    }

    #[test]
    fn test_parse_isbn13() {
        let id: Identifier = "978-0-306-40615-7".parse().unwrap();
        assert_eq!(id.kind, IdentifierKind::Isbn13);
        assert_eq!(id.isbn10.as_deref(), Some("0306406152"));
        assert_eq!(id.to_string(), "978-0-30640-615-7");
    }

    #[test]
    fn test_parse_979_has_no_isbn10() {
        let id = Identifier::parse("9791034304011").unwrap();
        assert_eq!(id.kind, IdentifierKind::Isbn13);
        assert_eq!(id.isbn10, None);
    }

    #[test]
    fn test_parse_upc_and_ean() {
        let upc = Identifier::parse("012345678905").unwrap();
        assert_eq!(upc.kind, IdentifierKind::UpcA);
        assert_eq!(upc.isbn13, None);
        assert_eq!(upc.to_string(), "012345678905");

        let ean = Identifier::parse("0012345678905").unwrap();
        assert_eq!(ean.kind, IdentifierKind::Ean13);
        assert_eq!(ean.isbn13, None);
    }

    #[test]
    fn test_parse_lccn() {
        let id = Identifier::parse("N78-890351").unwrap();
        assert_eq!(id.kind, IdentifierKind::Lccn);
        assert_eq!(id.value, "n78890351");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Identifier::parse(" - "), Err(IdentifierError::Empty));
        assert_eq!(
            Identifier::parse("hello"),
            Err(IdentifierError::Unrecognized {
                input: "hello".to_string()
            })
        );
    }

    #[test]
    fn test_kind_serde_and_display() {
        let json = serde_json::to_string(&IdentifierKind::UpcA).unwrap();
        assert_eq!(json, "\"upc_a\"");
        assert_eq!(IdentifierKind::Isbn13.to_string(), "ISBN-13");
        assert_eq!(IdentifierKind::all().len(), 5);
    }
}
