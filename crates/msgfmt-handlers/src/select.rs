#![forbid(unsafe_code)]

//! `select`: choose a case body by the value's text.
//!
//! ```text
//! {gender, select, female{She} male{He} other{They}} replied.
//! ```

use msgfmt::{HandlerCall, Result, Segment, TypeHandler, parse_cases};

/// Picks the case labelled with the value's text, falling back to `other`.
///
/// The chosen body is interpreted as a message against the same values.
/// With no matching case and no `other`, the placeholder renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectHandler;

impl TypeHandler for SelectHandler {
    fn handle(&self, call: HandlerCall<'_>) -> Result<Segment> {
        let cases = parse_cases(call.format)?;
        let selector = call.value.to_string();
        if let Some(body) = cases.case(&selector) {
            return call.recurse.process(body, call.values);
        }
        match cases.other() {
            Some(body) => {
                tracing::debug!(selector = %selector, "select fell back to other");
                call.recurse.process(body, call.values)
            }
            None => {
                tracing::debug!(selector = %selector, "select matched no case");
                Ok(Segment::empty())
            }
        }
    }
}
