//! Input normalization
//!
//! Scanners and hand-typed input carry hyphens, spaces and stray whitespace.
//! Every other module works on the normalized form produced here.

/// Characters stripped from anywhere in the input.
const SEPARATORS: [char; 2] = ['-', ' '];

/// Normalize an ISBN, EAN or UPC by removing hyphens and spaces.
///
/// Surrounding whitespace (tabs, newlines) is trimmed afterwards. Case is
/// preserved, so an ISBN-10 check digit of `x` stays lowercase.
///
/// ```
/// use shelf_identifiers::normalize_isbn;
/// assert_eq!(normalize_isbn("978-0-306-40615-7"), "9780306406157");
/// assert_eq!(normalize_isbn(" 0 306 40615 2\n"), "0306406152");
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_isbn(raw: &str) -> String {
    raw.chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize an LCCN: strip hyphens and spaces, trim, then lowercase.
///
/// LCCN alphabetic prefixes are case-insensitive.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_lccn(raw: &str) -> String {
    normalize_isbn(raw).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_isbn_strips_separators() {
        assert_eq!(normalize_isbn("0-306-40615-2"), "0306406152");
        assert_eq!(normalize_isbn("978 0 306 40615 7"), "9780306406157");
    }

    #[test]
    fn test_normalize_isbn_trims_other_whitespace() {
        assert_eq!(normalize_isbn("\t0306406152\r\n"), "0306406152");
    }

    #[test]
    fn test_normalize_isbn_keeps_case() {
        assert_eq!(normalize_isbn("0-8044-2957-x"), "080442957x");
    }

    #[test]
    fn test_normalize_isbn_passthrough() {
        assert_eq!(normalize_isbn("0306406152"), "0306406152");
        assert_eq!(normalize_isbn(""), "");
    }

    #[test]
    fn test_normalize_lccn_lowercases() {
        assert_eq!(normalize_lccn("N 78-890351"), "n78890351");
        assert_eq!(normalize_lccn("AGR64-000200"), "agr64000200");
    }
}
