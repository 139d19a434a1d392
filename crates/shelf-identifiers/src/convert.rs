//! Conversion between ISBN-10, ISBN-13 and UPC-A
//!
//! Conversions are structural: the input's own check digit is discarded and
//! a fresh one is computed for the target format. `None` means the input has
//! no equivalent in the target format.

use crate::checksum::{
    ean13_check_digit, is_valid_isbn, is_valid_isbn10, is_valid_isbn13, isbn10_check_digit,
    DIGITS_13, ISBN10_SHAPE,
};
use crate::classify::is_upc;
use crate::normalize::normalize_isbn;

/// Convert an ISBN-10 to its 978-prefixed ISBN-13.
///
/// The ISBN-10 check digit is not verified.
///
/// ```
/// use shelf_identifiers::isbn10_to_13;
/// assert_eq!(isbn10_to_13("0-306-40615-2").as_deref(), Some("9780306406157"));
/// assert_eq!(isbn10_to_13("12345"), None);
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn isbn10_to_13(raw: &str) -> Option<String> {
    let isbn = normalize_isbn(raw);
    if !ISBN10_SHAPE.is_match(&isbn) {
        return None;
    }

    let body = format!("978{}", &isbn[..9]);
    let check = ean13_check_digit(&body)?;
    Some(format!("{body}{check}"))
}

/// Convert a 978-prefixed ISBN-13 to its ISBN-10.
///
/// 979-prefixed ISBNs have no ISBN-10 form and yield `None`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn isbn13_to_10(raw: &str) -> Option<String> {
    let isbn = normalize_isbn(raw);
    if !DIGITS_13.is_match(&isbn) || !isbn.starts_with("978") {
        return None;
    }

    let body = &isbn[3..12];
    let check = isbn10_check_digit(body)?;
    Some(format!("{body}{check}"))
}

/// Convert a UPC-A to an ISBN-13 by prepending `0`.
///
/// Returns `None` unless the resulting EAN-13 is a valid Bookland ISBN, in
/// which case callers should fall back to a non-ISBN lookup.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn upc_to_isbn13(raw: &str) -> Option<String> {
    if !is_upc(raw) {
        return None;
    }

    let candidate = format!("0{}", normalize_isbn(raw));
    is_valid_isbn(&candidate).then_some(candidate)
}

/// Resolve any scanned code to the ISBN-13 used as the catalog lookup key.
///
/// Accepts a valid ISBN-13, a valid ISBN-10, or a UPC-A with a Bookland
/// equivalent.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn to_isbn13(raw: &str) -> Option<String> {
    if is_valid_isbn13(raw) {
        Some(normalize_isbn(raw))
    } else if is_valid_isbn10(raw) {
        isbn10_to_13(raw)
    } else {
        upc_to_isbn13(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn10_to_13() {
        assert_eq!(isbn10_to_13("0306406152").as_deref(), Some("9780306406157"));
        assert_eq!(isbn10_to_13("080442957X").as_deref(), Some("9780804429573"));
    }

    #[test]
    fn test_isbn10_to_13_ignores_input_checksum() {
        // Wrong check digit, same body: conversion still succeeds.
        assert_eq!(isbn10_to_13("0306406151").as_deref(), Some("9780306406157"));
    }

    #[test]
    fn test_isbn10_to_13_rejects_wrong_shape() {
        assert_eq!(isbn10_to_13("030640615"), None);
        assert_eq!(isbn10_to_13("03064X6152"), None);
        assert_eq!(isbn10_to_13("9780306406157"), None);
    }

    #[test]
    fn test_isbn13_to_10() {
        assert_eq!(isbn13_to_10("978-0-306-40615-7").as_deref(), Some("0306406152"));
        assert_eq!(isbn13_to_10("9780804429573").as_deref(), Some("080442957X"));
    }

    #[test]
    fn test_isbn13_to_10_rejects_979_and_others() {
        assert_eq!(isbn13_to_10("9791034304019"), None);
        assert_eq!(isbn13_to_10("0012345678905"), None);
        assert_eq!(isbn13_to_10("978030640615"), None);
    }

    #[test]
    fn test_upc_to_isbn13_without_bookland_equivalent() {
        assert_eq!(upc_to_isbn13("012345678905"), None);
        assert_eq!(upc_to_isbn13("not a upc"), None);
    }

    #[test]
    fn test_to_isbn13() {
        assert_eq!(to_isbn13("978-0-306-40615-7").as_deref(), Some("9780306406157"));
        assert_eq!(to_isbn13("0-306-40615-2").as_deref(), Some("9780306406157"));
        assert_eq!(to_isbn13("012345678905"), None);
        assert_eq!(to_isbn13("0306406151"), None);
    }
}
