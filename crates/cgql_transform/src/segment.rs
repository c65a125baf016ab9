//! Padding trimming and per-segment processing.
//!
//! Condensing leaves a single space where a segment's text originally
//! touched the literal's own delimiter. That boundary space is meaningless
//! at the true outer edges of the literal and gets stripped there, but at
//! an internal seam next to an interpolation the same space separates the
//! interpolated value from the surrounding text and must stay.

use crate::condense::condense;

/// Removes the first character iff `should_trim` and it is a single space.
///
/// Never removes more than one character and never a non-space.
#[must_use]
pub fn trim_leading_space(mut text: String, should_trim: bool) -> String {
    if should_trim && text.as_bytes().first() == Some(&b' ') {
        text.remove(0);
    }
    text
}

/// Removes the last character iff `should_trim` and it is a single space.
///
/// Never removes more than one character and never a non-space.
#[must_use]
pub fn trim_trailing_space(mut text: String, should_trim: bool) -> String {
    if should_trim && text.as_bytes().last() == Some(&b' ') {
        text.pop();
    }
    text
}

/// Condenses one segment and trims its outer-edge padding.
///
/// `is_first` and `is_last` say whether this segment touches the opening
/// or closing delimiter of the enclosing literal. A plain string is its
/// own first and last segment, so it is processed with both flags set.
#[must_use]
pub fn process_segment(raw: &str, is_first: bool, is_last: bool) -> String {
    let condensed = condense(raw);
    let condensed = trim_leading_space(condensed, is_first);
    trim_trailing_space(condensed, is_last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_leading_only_when_asked() {
        assert_eq!(trim_leading_space(" a".into(), true), "a");
        assert_eq!(trim_leading_space(" a".into(), false), " a");
    }

    #[test]
    fn test_trim_only_a_space() {
        assert_eq!(trim_leading_space("a ".into(), true), "a ");
        assert_eq!(trim_trailing_space(" a".into(), true), " a");
        assert_eq!(trim_leading_space(String::new(), true), "");
    }

    #[test]
    fn test_trim_exactly_one() {
        // The condensed input never has runs, but the trimmer must not
        // assume that.
        assert_eq!(trim_leading_space("  a".into(), true), " a");
        assert_eq!(trim_trailing_space("a  ".into(), true), "a ");
    }

    #[test]
    fn test_process_first_segment() {
        assert_eq!(process_segment("  a ", true, false), "a ");
    }

    #[test]
    fn test_process_last_segment() {
        assert_eq!(process_segment(" b  ", false, true), " b");
    }

    #[test]
    fn test_process_sole_segment_like_plain_string() {
        assert_eq!(process_segment("  a    b  ", true, true), "a b");
    }

    #[test]
    fn test_process_interior_segment_keeps_seam_spaces() {
        assert_eq!(process_segment(" between ", false, false), " between ");
    }
}
