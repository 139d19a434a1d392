//! Display hyphenation for ISBNs
//!
//! Fixed positional groups, not registrant-range-aware hyphenation.

use crate::normalize::normalize_isbn;

/// Group sizes for a 10-character ISBN: `D-DDDD-DDDD-D`.
const ISBN10_GROUPS: [usize; 4] = [1, 4, 4, 1];
/// Group sizes for a 13-character ISBN: `DDD-D-DDDDD-DDD-D`.
const ISBN13_GROUPS: [usize; 5] = [3, 1, 5, 3, 1];

/// Hyphenate a 10- or 13-character ISBN for display.
///
/// Any other length returns the original input untouched.
///
/// ```
/// use shelf_identifiers::format_isbn;
/// assert_eq!(format_isbn("0306406152"), "0-3064-0615-2");
/// assert_eq!(format_isbn("9780306406157"), "978-0-30640-615-7");
/// assert_eq!(format_isbn("12345"), "12345");
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_isbn(raw: &str) -> String {
    let chars: Vec<char> = normalize_isbn(raw).chars().collect();
    match chars.len() {
        10 => hyphenate(&chars, &ISBN10_GROUPS),
        13 => hyphenate(&chars, &ISBN13_GROUPS),
        _ => raw.to_string(),
    }
}

fn hyphenate(chars: &[char], groups: &[usize]) -> String {
    let mut out = String::with_capacity(chars.len() + groups.len());
    let mut start = 0;
    for (i, &len) in groups.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.extend(&chars[start..start + len]);
        start += len;
    }
    out
}
