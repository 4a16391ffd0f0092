#![forbid(unsafe_code)]

//! Balanced `{` / `}` matching.
//!
//! There is no escape syntax: every brace byte counts, including braces a
//! handler would consider literal text. Both braces are ASCII, so scanning
//! bytes is safe on any UTF-8 input and the returned index is always a
//! char boundary.

/// Byte index of the `}` closing the `{` at `open`, or `None` when the text
/// ends first.
///
/// The byte at `open` is not inspected; scanning starts right after it.
///
/// ```
/// use msgfmt::bracket::find_closing_bracket;
///
/// assert_eq!(find_closing_bracket("{a{b}c}d", 0), Some(6));
/// assert_eq!(find_closing_bracket("{a{b}c", 0), None);
/// ```
#[must_use]
pub fn find_closing_bracket(text: &str, open: usize) -> Option<usize> {
    let start = open.checked_add(1)?;
    let tail = text.as_bytes().get(start..)?;
    let mut depth = 0usize;
    for (offset, byte) in tail.iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' if depth == 0 => return Some(start + offset),
            b'}' => depth -= 1,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_block() {
        assert_eq!(find_closing_bracket("{name}", 0), Some(5));
    }

    #[test]
    fn skips_nested_pairs() {
        let text = "{n, select, yes{Hi {name}} no{Bye}}";
        assert_eq!(find_closing_bracket(text, 0), Some(text.len() - 1));
        // Inner case body.
        let inner = text.find("{Hi").unwrap();
        assert_eq!(&text[inner..=find_closing_bracket(text, inner).unwrap()], "{Hi {name}}");
    }

    #[test]
    fn open_in_middle_of_text() {
        let text = "Hello {name}, bye";
        assert_eq!(find_closing_bracket(text, 6), Some(11));
    }

    #[test]
    fn unmatched_returns_none() {
        assert_eq!(find_closing_bracket("{", 0), None);
        assert_eq!(find_closing_bracket("{{}", 0), None);
        assert_eq!(find_closing_bracket("{a {b {c}}", 0), None);
    }

    #[test]
    fn open_past_end_returns_none() {
        assert_eq!(find_closing_bracket("ab", 2), None);
        assert_eq!(find_closing_bracket("ab", 10), None);
        assert_eq!(find_closing_bracket("", usize::MAX), None);
    }

    #[test]
    fn multibyte_text_is_indexed_by_byte() {
        let text = "{n\u{e9}\u{65e5}}";
        assert_eq!(find_closing_bracket(text, 0), Some(text.len() - 1));
        assert!(text.is_char_boundary(text.len() - 1));
    }

    #[test]
    fn first_close_at_depth_zero_wins() {
        assert_eq!(find_closing_bracket("{a}b}", 0), Some(2));
    }
}
