#![forbid(unsafe_code)]

//! Splitting a placeholder block into `key`, `type` and `format`.
//!
//! Only the first two commas are separators. Everything after the second
//! comma is the `format` field verbatim (apart from one trim), so commas
//! inside nested sub-syntax such as `{n, plural, one{a, b} other{c}}` never
//! split the block further.

use smallvec::SmallVec;

/// The at-most-three top-level fields of a block interior.
pub type Fields<'a> = SmallVec<[&'a str; 3]>;

/// Split the interior of a block (outer braces already removed).
///
/// Each field before a separator is trimmed. An empty remainder ends the
/// sequence, so `"key"` yields one field and `"key, type"` two.
///
/// ```
/// use msgfmt::placeholder::split_fields;
///
/// let fields = split_fields("count, plural, one{a, b} other{c}");
/// assert_eq!(fields.as_slice(), ["count", "plural", "one{a, b} other{c}"]);
/// ```
#[must_use]
pub fn split_fields(block: &str) -> Fields<'_> {
    let mut fields = Fields::new();
    let mut rest = block;
    while !rest.is_empty() {
        if fields.len() == 2 {
            fields.push(rest.trim());
            break;
        }
        match rest.find(',') {
            Some(comma) => {
                fields.push(rest[..comma].trim());
                rest = rest[comma + 1..].trim();
            }
            None => {
                fields.push(rest.trim());
                break;
            }
        }
    }
    fields
}

/// A decomposed `{key, type, format}` block borrowing from the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placeholder<'a> {
    /// Lookup key into the value mapping. Empty for an empty block.
    pub key: &'a str,
    /// Name of the type handler, if any.
    pub kind: Option<&'a str>,
    /// Raw, unparsed handler format body.
    pub format: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    /// Parse the interior of a block.
    #[must_use]
    pub fn parse(block: &'a str) -> Self {
        let mut fields = split_fields(block).into_iter();
        Self {
            key: fields.next().unwrap_or_default(),
            kind: fields.next().filter(|kind| !kind.is_empty()),
            format: fields.next(),
        }
    }

    /// Handler format body, empty when the block has none.
    #[must_use]
    pub fn format_or_empty(&self) -> &'a str {
        self.format.unwrap_or_default()
    }
}
