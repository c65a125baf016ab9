//! The whitespace condensing algorithm.
//!
//! Two passes, in order. The first collapses every maximal run of
//! whitespace into a single space, normalizing line breaks away. The second
//! deletes the single spaces that sit at a word/non-word seam, where they
//! carry no meaning for a GraphQL query string, while keeping the ones
//! between sibling identifiers and the ones guarding a `.`.

/// Returns true for the whitespace characters that get collapsed.
#[inline]
const fn is_collapsible(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0C}')
}

/// Returns true for word characters (ASCII alphanumeric or underscore).
///
/// Non-ASCII characters are deliberately non-word: a space next to one is
/// treated like a space next to punctuation and removed.
#[inline]
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Condenses whitespace in `text`.
///
/// Total on any input and idempotent; the empty string condenses to itself.
/// Boundary spaces at the very start or end of the input are only removed
/// when their inner neighbor makes them removable, never for being at the
/// edge alone. That keeps the single space a template segment owes to an
/// adjacent interpolation.
///
/// ```
/// use cgql_transform::condense;
///
/// assert_eq!(condense("query {\n  field\n}"), "query{field}");
/// assert_eq!(condense("a.b"), "a.b");
/// ```
#[must_use]
pub fn condense(text: &str) -> String {
    strip_seam_spaces(&collapse_runs(text))
}

/// Pass one: every maximal whitespace run becomes exactly one space.
fn collapse_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if is_collapsible(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Pass two: drop each space sitting at a word/non-word seam.
///
/// A space is dropped iff it has a preceding character that is non-word, or
/// a following character that is non-word and not a `.`. A space with no
/// neighbor on a side is never dropped for that side, so a lone leading or
/// trailing space before/after a word survives. The rule is intentionally
/// conservative about `.` only; commas, parentheses and the like do cause
/// removal.
fn strip_seam_spaces(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let after_seam = i > 0 && !is_word_char(chars[i - 1]);
            let before_seam = chars
                .get(i + 1)
                .is_some_and(|&n| !is_word_char(n) && n != '.');
            if after_seam || before_seam {
                continue;
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(condense(""), "");
    }

    #[test]
    fn test_collapses_mixed_runs() {
        assert_eq!(
            condense("replaces    whitespace\tcharacters\n   with a single space."),
            "replaces whitespace characters with a single space."
        );
    }

    #[test]
    fn test_removes_space_around_braces() {
        assert_eq!(condense("query {\n  field\n}"), "query{field}");
    }

    #[test]
    fn test_keeps_space_between_sibling_fields() {
        assert_eq!(
            condense("query { simpleQuery{ options date age } }"),
            "query{simpleQuery{options date age}}"
        );
    }

    #[test]
    fn test_dot_is_not_a_removal_trigger() {
        assert_eq!(condense("a.b"), "a.b");
        assert_eq!(condense("word ."), "word .");
    }

    #[test]
    fn test_space_after_punctuation_is_removed() {
        // The seam rule fires on the preceding comma even at the end of
        // the input; "before," + "," behavior the query tests rely on.
        assert_eq!(condense(", "), ",");
        assert_eq!(condense("($id: ID, $age: String)"), "($id:ID,$age:String)");
    }

    #[test]
    fn test_lone_boundary_spaces_survive() {
        assert_eq!(condense(" a"), " a");
        assert_eq!(condense("a "), "a ");
        assert_eq!(condense("  a    b  "), " a b ");
    }

    #[test]
    fn test_leading_space_before_punctuation_is_removed() {
        assert_eq!(condense(" {a}"), "{a}");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "",
            "  a    b  ",
            "query {\n  simpleQuery{\n    options\n  }\n}",
            "retains space , and . here",
            "日本語  と  空白",
        ] {
            let once = condense(input);
            assert_eq!(condense(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_non_ascii_neighbors_count_as_non_word() {
        assert_eq!(condense("é x"), "éx");
    }

    #[test]
    fn test_nested_query() {
        assert_eq!(
            condense("\n  query {\n      simpleQuery{\n          options\n      }\n  }"),
            " query{simpleQuery{options}}"
        );
    }
}
