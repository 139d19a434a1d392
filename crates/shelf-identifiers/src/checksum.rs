//! Check digit computation and checksum validation
//!
//! ISBN-10 uses a mod-11 weighted sum with weights 10..=2 and an `X` check
//! value of 10. EAN-13 (and therefore ISBN-13) and UPC-A use the same mod-10
//! alternating 1/3 weighting; they differ only in which parity gets the 3,
//! because a UPC-A is an EAN-13 with the leading zero dropped.

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::normalize_isbn;

lazy_static! {
    // `[0-9]` rather than `\d`: the regex crate's `\d` matches any Unicode digit.
    pub(crate) static ref ISBN10_SHAPE: Regex = Regex::new(r"^[0-9]{9}[0-9Xx]$").unwrap();
    pub(crate) static ref DIGITS_12: Regex = Regex::new(r"^[0-9]{12}$").unwrap();
    pub(crate) static ref DIGITS_13: Regex = Regex::new(r"^[0-9]{13}$").unwrap();
}

/// EAN-13 prefixes reserved for books ("Bookland").
pub(crate) const BOOKLAND_PREFIXES: [&str; 2] = ["978", "979"];

/// Parse exactly `len` ASCII digits into their numeric values.
fn digit_values(digits: &str, len: usize) -> Option<Vec<u32>> {
    if digits.len() != len {
        return None;
    }
    digits
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| u32::from(b - b'0')))
        .collect()
}

/// Weighted sum for ISBN-10: digit[i] * (10 - i).
fn isbn10_weighted_sum(values: &[u32]) -> u32 {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| v * (10 - i as u32))
        .sum()
}

/// Alternating-weight sum. `even_weight` applies to 0-based even positions,
/// the other of {1, 3} to odd positions.
fn alternating_sum(values: &[u32], even_weight: u32) -> u32 {
    let odd_weight = 4 - even_weight;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| if i % 2 == 0 { v * even_weight } else { v * odd_weight })
        .sum()
}

fn mod10_check(sum: u32) -> u32 {
    (10 - sum % 10) % 10
}

/// Compute the ISBN-10 check character for the first 9 digits.
///
/// Returns `'X'` when the check value is 10, and `None` unless the input is
/// exactly 9 ASCII digits.
///
/// ```
/// use shelf_identifiers::isbn10_check_digit;
/// assert_eq!(isbn10_check_digit("030640615"), Some('2'));
/// assert_eq!(isbn10_check_digit("080442957"), Some('X'));
/// ```
pub fn isbn10_check_digit(first_nine: &str) -> Option<char> {
    let values = digit_values(first_nine, 9)?;
    let check = (11 - isbn10_weighted_sum(&values) % 11) % 11;
    if check == 10 {
        Some('X')
    } else {
        char::from_digit(check, 10)
    }
}

/// Compute the EAN-13 check digit for the first 12 digits.
pub fn ean13_check_digit(first_twelve: &str) -> Option<u32> {
    let values = digit_values(first_twelve, 12)?;
    Some(mod10_check(alternating_sum(&values, 1)))
}

/// Compute the UPC-A check digit for the first 11 digits.
pub fn upc_check_digit(first_eleven: &str) -> Option<u32> {
    let values = digit_values(first_eleven, 11)?;
    Some(mod10_check(alternating_sum(&values, 3)))
}

/// Validate an ISBN-10 (9 digits followed by a digit or `X`/`x`).
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_valid_isbn10(raw: &str) -> bool {
    let isbn = normalize_isbn(raw);
    if !ISBN10_SHAPE.is_match(&isbn) {
        return false;
    }

    let Some(values) = digit_values(&isbn[..9], 9) else {
        return false;
    };
    let check = match isbn.as_bytes()[9] {
        b'X' | b'x' => 10,
        b => u32::from(b - b'0'),
    };

    (isbn10_weighted_sum(&values) + check) % 11 == 0
}

/// Validate a Bookland ISBN-13 (978/979 prefix plus a valid EAN-13 checksum).
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_valid_isbn13(raw: &str) -> bool {
    let isbn = normalize_isbn(raw);
    DIGITS_13.is_match(&isbn)
        && BOOKLAND_PREFIXES.iter().any(|p| isbn.starts_with(p))
        && is_valid_ean(&isbn)
}

/// Validate an ISBN in either its 10- or 13-character form.
///
/// ```
/// use shelf_identifiers::is_valid_isbn;
/// assert!(is_valid_isbn("0-306-40615-2"));
/// assert!(is_valid_isbn("978-0-306-40615-7"));
/// assert!(!is_valid_isbn("0306406151"));
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_valid_isbn(raw: &str) -> bool {
    let isbn = normalize_isbn(raw);
    if ISBN10_SHAPE.is_match(&isbn) {
        is_valid_isbn10(&isbn)
    } else {
        is_valid_isbn13(&isbn)
    }
}

/// Validate any EAN-13, regardless of prefix.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_valid_ean(raw: &str) -> bool {
    let ean = normalize_isbn(raw);
    if !DIGITS_13.is_match(&ean) {
        return false;
    }
    let expected = u32::from(ean.as_bytes()[12] - b'0');
    ean13_check_digit(&ean[..12]) == Some(expected)
}

/// Validate a 12-digit UPC-A.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_valid_upc(raw: &str) -> bool {
    let upc = normalize_isbn(raw);
    if !DIGITS_12.is_match(&upc) {
        return false;
    }
    let expected = u32::from(upc.as_bytes()[11] - b'0');
    upc_check_digit(&upc[..11]) == Some(expected)
}
