//! Format classification
//!
//! Decides what kind of code a scanned or typed string most likely is.
//! Checksum-valid ISBNs and UPCs always take precedence over the numeric
//! LCCN fallback, since the digit-length windows overlap.

use lazy_static::lazy_static;
use regex::Regex;

use crate::checksum::{
    is_valid_ean, is_valid_isbn10, is_valid_isbn13, is_valid_upc, DIGITS_12,
};
use crate::identifier::IdentifierKind;
use crate::normalize::{normalize_isbn, normalize_lccn};

lazy_static! {
    // Alphabetic prefix followed by the serial, e.g. `n78890351`, `agr64000200`.
    static ref LCCN_ALPHA: Regex = Regex::new(r"^[a-z]+[0-9]{8,}$").unwrap();
    static ref LCCN_NUMERIC: Regex = Regex::new(r"^[0-9]{8,12}$").unwrap();
}

/// Shape test for UPC-A: exactly 12 digits after normalization.
///
/// The checksum is not verified; see [`crate::is_valid_upc`].
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_upc(raw: &str) -> bool {
    DIGITS_12.is_match(&normalize_isbn(raw))
}

/// Whether a code should be treated as a Library of Congress Control Number.
///
/// ```
/// use shelf_identifiers::is_lccn;
/// assert!(is_lccn("n78-890351"));
/// assert!(is_lccn("78308782"));
/// assert!(!is_lccn("0306406152")); // valid ISBN-10
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_lccn(raw: &str) -> bool {
    let lccn = normalize_lccn(raw);

    if LCCN_ALPHA.is_match(&lccn) {
        return true;
    }
    if !LCCN_NUMERIC.is_match(&lccn) {
        return false;
    }

    match lccn.len() {
        10 => !is_valid_isbn10(&lccn),
        12 => !is_valid_upc(&lccn),
        _ => true,
    }
}

/// Classify a raw code into the most specific identifier kind it satisfies.
///
/// Order: ISBN-10, ISBN-13, other EAN-13, UPC-A, LCCN. Only checksum-valid
/// codes are reported as ISBN/EAN/UPC.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn identify(raw: &str) -> Option<IdentifierKind> {
    let kind = if is_valid_isbn10(raw) {
        Some(IdentifierKind::Isbn10)
    } else if is_valid_isbn13(raw) {
        Some(IdentifierKind::Isbn13)
    } else if is_valid_ean(raw) {
        Some(IdentifierKind::Ean13)
    } else if is_valid_upc(raw) {
        Some(IdentifierKind::UpcA)
    } else if is_lccn(raw) {
        Some(IdentifierKind::Lccn)
    } else {
        None
    };

    tracing::trace!(input = raw, ?kind, "classified identifier");
    kind
}
