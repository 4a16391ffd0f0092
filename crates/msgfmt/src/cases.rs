#![forbid(unsafe_code)]

//! Case extraction for branch-based handlers.
//!
//! Handlers such as `select` and `plural` receive a format body like
//! `offset:1 =0{nobody} one{# guest} other{# guests}`. [`parse_cases`]
//! splits it into bare leading arguments (`offset:1`) and labelled case
//! bodies. A term runs up to the next whitespace or `{`. A term whose next
//! non-whitespace character is `{` labels the brace body that follows; any
//! other term is a bare argument. A `{` with no term in front of it starts
//! a term of its own, so `{x} other{y}` has the bare argument `{x}`.
//!
//! Case bodies are returned raw (braces stripped, nested syntax untouched)
//! and borrow from the input.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::bracket::find_closing_bracket;
use crate::error::{FormatError, Result};

/// Label used by branch handlers when nothing else matches.
pub const OTHER: &str = "other";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseSet<'a> {
    /// Bare arguments in order of appearance.
    pub args: SmallVec<[&'a str; 2]>,
    /// Case label → raw case body. A repeated label keeps its last body.
    pub cases: FxHashMap<&'a str, &'a str>,
}

impl<'a> CaseSet<'a> {
    #[must_use]
    pub fn case(&self, label: &str) -> Option<&'a str> {
        self.cases.get(label).copied()
    }

    /// Body of the `other` case.
    #[must_use]
    pub fn other(&self) -> Option<&'a str> {
        self.case(OTHER)
    }

    /// Value of a `name:value` argument, e.g. `arg("offset")` for `offset:1`.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&'a str> {
        self.args.iter().find_map(|arg| {
            arg.strip_prefix(name)
                .and_then(|rest| rest.strip_prefix(':'))
        })
    }
}

/// Split a handler format body into bare arguments and labelled cases.
///
/// A brace with no label in front of it opens a bare argument rather than
/// a case. Fails with [`FormatError::UnbalancedBraces`] when a case body is
/// never closed.
///
/// ```
/// use msgfmt::cases::parse_cases;
///
/// let set = parse_cases("offset:1 one{A} other{B}").unwrap();
/// assert_eq!(set.args.as_slice(), ["offset:1"]);
/// assert_eq!(set.case("one"), Some("A"));
/// assert_eq!(set.other(), Some("B"));
/// ```
pub fn parse_cases(text: &str) -> Result<CaseSet<'_>> {
    let mut set = CaseSet::default();
    let mut label: Option<&str> = None;
    let mut i = 0;

    while let Some(ch) = text[i..].chars().next() {
        if ch.is_whitespace() {
            i += ch.len_utf8();
            continue;
        }

        if ch == '{'
            && let Some(name) = label.take()
        {
            let close =
                find_closing_bracket(text, i).ok_or_else(|| FormatError::unbalanced(text, i))?;
            set.cases.insert(name, &text[i + 1..close]);
            i = close + 1;
            continue;
        }

        // A new term starts; the previous one had no body.
        if let Some(arg) = label.take() {
            set.args.push(arg);
        }
        let rest = i + ch.len_utf8();
        let end = text[rest..]
            .find(|c: char| c.is_whitespace() || c == '{')
            .map_or(text.len(), |offset| rest + offset);
        label = Some(&text[i..end]);
        i = end;
    }

    if let Some(arg) = label {
        set.args.push(arg);
    }
    Ok(set)
}
