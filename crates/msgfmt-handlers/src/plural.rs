#![forbid(unsafe_code)]

//! `plural`: choose a case body by count.
//!
//! ```text
//! {guests, plural, offset:1
//!     =0{Nobody came}
//!     =1{{host} came alone}
//!     one{{host} and one guest}
//!     other{{host} and # guests}}
//! ```
//!
//! Selection order: an exact `=N` label matching the raw count, then the
//! locale's category for `count - offset`, then `other`. In the chosen
//! body every `#` outside nested braces becomes a value leaf holding
//! `count - offset`. The text around each `#` is processed on its own, so
//! the count never takes part in parsing.

use msgfmt::{HandlerCall, Result, Segment, TypeHandler, Value, parse_cases};

use crate::plural_rule::{PluralCategory, PluralRule};

/// Plural selection with `offset:N`, `=N` exact cases and `#` substitution.
///
/// The locale passed to the formatter picks the [`PluralRule`]. Values that
/// are not whole numbers select `other`, with `#` showing the value as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluralHandler {
    rule: Option<PluralRule>,
}

impl PluralHandler {
    /// Handler that ignores the formatter locale and always uses `rule`.
    #[must_use]
    pub const fn with_rule(rule: PluralRule) -> Self {
        Self { rule: Some(rule) }
    }

    fn rule_for(&self, locale: &str) -> PluralRule {
        self.rule.unwrap_or_else(|| PluralRule::for_locale(locale))
    }
}

impl TypeHandler for PluralHandler {
    fn handle(&self, call: HandlerCall<'_>) -> Result<Segment> {
        let cases = parse_cases(call.format)?;
        let offset = cases
            .arg("offset")
            .and_then(|n| n.trim().parse::<i64>().ok())
            .unwrap_or(0);

        let Some(count) = call.value.as_i64() else {
            tracing::debug!(value = %call.value, "plural value is not an integer");
            return match cases.other() {
                Some(body) => render_body(body, call.value, call),
                None => Ok(Segment::empty()),
            };
        };

        let shown = count.saturating_sub(offset);
        let exact = format!("={count}");
        let category = self.rule_for(call.locale).categorize(shown);
        let body = cases
            .case(&exact)
            .or_else(|| cases.case(category.as_str()))
            .or_else(|| {
                if category != PluralCategory::Other {
                    tracing::debug!(count, category = category.as_str(), "plural fell back to other");
                }
                cases.other()
            });

        match body {
            Some(body) => render_body(body, &Value::Int(shown), call),
            None => {
                tracing::debug!(count, "plural matched no case");
                Ok(Segment::empty())
            }
        }
    }
}

/// Process `body` with every top-level `#` standing for `count`.
fn render_body(body: &str, count: &Value, call: HandlerCall<'_>) -> Result<Segment> {
    let pieces = split_count_slots(body);
    if pieces.len() == 1 {
        return call.recurse.process(body, call.values);
    }
    let mut parts = Vec::with_capacity(pieces.len() * 2);
    for (n, piece) in pieces.into_iter().enumerate() {
        if n > 0 {
            parts.push(Segment::Value(count.clone()));
        }
        if !piece.is_empty() {
            parts.push(call.recurse.process(piece, call.values)?);
        }
    }
    Ok(Segment::Seq(parts))
}

/// Split `body` at every `#` at brace depth zero.
fn split_count_slots(body: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '#' if depth == 0 => {
                pieces.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&body[start..]);
    pieces
}
