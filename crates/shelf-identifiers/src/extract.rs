//! ISBN extraction from free text
//!
//! Pulls ISBNs out of pasted catalog records, copyright pages and the like.
//! Only checksum-valid candidates are returned.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::checksum::is_valid_isbn;
use crate::normalize::normalize_isbn;

/// ISBN found in text, with byte offsets into the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ExtractedIsbn {
    /// Normalized ISBN, check digit uppercased
    pub value: String,
    pub start_index: u32,
    pub end_index: u32,
}

lazy_static! {
    // Optional "ISBN:" label, optional Bookland prefix, then 9 digits and a
    // check character, each optionally followed by a hyphen or space.
    static ref ISBN_REGEX: Regex = Regex::new(
        r"(?i)(?:isbn(?:-1[03])?[:\s-]*)?(?P<isbn>(?:97[89][- ]?)?(?:[0-9][- ]?){9}[0-9x])"
    ).unwrap();

    // ISBN-10 reading of a candidate, anchored at the candidate's start.
    static ref ISBN10_REGEX: Regex = Regex::new(r"(?i)^(?:[0-9][- ]?){9}[0-9x]").unwrap();
}

/// Normalize `text[start..end]` and keep it if it is a valid ISBN whose
/// offsets fit in `u32`.
fn valid_candidate(text: &str, start: usize, end: usize) -> Option<ExtractedIsbn> {
    let start_index = u32::try_from(start).ok()?;
    let end_index = u32::try_from(end).ok()?;

    let value = normalize_isbn(text.get(start..end)?).to_ascii_uppercase();
    is_valid_isbn(&value).then_some(ExtractedIsbn {
        value,
        start_index,
        end_index,
    })
}

/// Extract every checksum-valid ISBN with its position, in text order.
///
/// A 978/979-led candidate that fails as an ISBN-13 is retried as the
/// ISBN-10 starting at the same position. Matches past `u32::MAX` bytes are
/// skipped.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_isbn_matches(text: &str) -> Vec<ExtractedIsbn> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(cap) = ISBN_REGEX.captures_at(text, pos) {
        let (Some(whole), Some(m)) = (cap.get(0), cap.name("isbn")) else {
            break;
        };

        let candidate = valid_candidate(text, m.start(), m.end()).or_else(|| {
            ISBN10_REGEX
                .find(&text[m.start()..])
                .filter(|short| m.start() + short.end() < m.end())
                .and_then(|short| valid_candidate(text, m.start(), m.start() + short.end()))
        });

        match candidate {
            Some(isbn) => {
                pos = isbn.end_index as usize;
                found.push(isbn);
            }
            None => pos = whole.end(),
        }
    }

    found
}

/// Extract distinct checksum-valid ISBNs, in order of first appearance.
///
/// ```
/// use shelf_identifiers::extract_isbns;
/// let isbns = extract_isbns("ISBN: 978-0-321-12521-7 and also 0-306-40615-2");
/// assert_eq!(isbns, vec!["9780321125217", "0306406152"]);
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_isbns(text: &str) -> Vec<String> {
    let mut isbns: Vec<String> = Vec::new();
    for found in extract_isbn_matches(text) {
        if !isbns.contains(&found.value) {
            isbns.push(found.value);
        }
    }
    tracing::debug!(count = isbns.len(), "extracted ISBNs");
    isbns
}
