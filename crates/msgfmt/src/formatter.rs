#![forbid(unsafe_code)]

//! The formatting engine.
//!
//! # Processing model
//!
//! A message is scanned for its first `{`. The balanced block starting there
//! is split into `key`, `type` and `format`; the key is resolved against the
//! value mapping and, when `type` names a registered handler, the handler
//! turns the value into this block's contribution. The text after the block
//! is processed the same way. The result of one step is
//! `Seq[head?, contribution, tail?]` with empty parts omitted, so a message
//! with several placeholders yields a right-nested chain:
//!
//! ```text
//! "a{x}b{y}c"  ->  Seq[ "a", x, Seq[ "b", y, Seq[ "c" ] ] ]
//! ```
//!
//! The scan walks byte offsets into the caller's string and folds the chain
//! from the right once the message is consumed, so the number of
//! placeholders does not add call depth. Only handlers recursing into case
//! bodies nest calls, bounded by the brace depth of the message.
//!
//! # Caching
//!
//! [`MessageFormatter::format`] memoizes flattened text per
//! `(message, values)` pair; see [`crate::cache`] for the key schema.
//! [`MessageFormatter::process`] and handler recursion are never cached.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::bracket::find_closing_bracket;
use crate::cache::{DEFAULT_CACHE_CAPACITY, FormatCache, FormatCacheStats};
use crate::error::{FormatError, Result};
use crate::handler::{HandlerCall, Recurse, TypeHandler, TypeHandlers};
use crate::placeholder::Placeholder;
use crate::segment::Segment;
use crate::value::Values;

/// Interprets messages against values using a fixed locale and handler set.
///
/// The locale and handlers are fixed at construction. The only mutable
/// state is the `format` cache, kept behind a mutex so a formatter can be
/// shared between threads.
#[derive(Debug)]
pub struct MessageFormatter {
    locale: String,
    handlers: TypeHandlers,
    cache: Mutex<FormatCache>,
}

impl MessageFormatter {
    /// Formatter with the default cache capacity.
    #[must_use]
    pub fn new(locale: impl Into<String>, handlers: TypeHandlers) -> Self {
        Self::builder(locale).handlers(handlers).build()
    }

    #[must_use]
    pub fn builder(locale: impl Into<String>) -> FormatterBuilder {
        FormatterBuilder::new(locale)
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn handlers(&self) -> &TypeHandlers {
        &self.handlers
    }

    /// Format `message` into text, reusing a cached result when the same
    /// message was formatted with equal values before.
    pub fn format(&self, message: &str, values: &Values) -> Result<String> {
        if let Some(text) = self.lock_cache().get(message, values) {
            return Ok(text);
        }
        let text = self.process(message, values)?.to_text();
        self.lock_cache().put(message, values, &text);
        Ok(text)
    }

    /// Process `message` into a segment tree without flattening.
    ///
    /// The result is always a [`Segment::Seq`]: empty for an empty message,
    /// a single text leaf for a message without placeholders.
    pub fn process(&self, message: &str, values: &Values) -> Result<Segment> {
        let mut chain: Vec<(&str, Segment)> = Vec::new();
        let mut offset = 0;

        while let Some(found) = message[offset..].find('{') {
            let open = offset + found;
            let close = find_closing_bracket(message, open)
                .ok_or_else(|| FormatError::unbalanced(message, open))?;
            let placeholder = Placeholder::parse(&message[open + 1..close]);
            let contribution = self.resolve(&placeholder, values)?;
            chain.push((&message[offset..open], contribution));
            offset = close + 1;
        }

        let rest = &message[offset..];
        let mut tail = (!rest.is_empty()).then(|| Segment::Seq(vec![Segment::text(rest)]));
        for (head, contribution) in chain.into_iter().rev() {
            let mut parts = Vec::with_capacity(3);
            if !head.is_empty() {
                parts.push(Segment::text(head));
            }
            parts.push(contribution);
            parts.extend(tail.take());
            tail = Some(Segment::Seq(parts));
        }
        Ok(tail.unwrap_or_default())
    }

    /// Hit/miss statistics of the `format` cache.
    #[must_use]
    pub fn cache_stats(&self) -> FormatCacheStats {
        self.lock_cache().stats()
    }

    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    fn resolve(&self, placeholder: &Placeholder<'_>, values: &Values) -> Result<Segment> {
        let value = values.resolve(placeholder.key);
        let handler = placeholder.kind.and_then(|kind| self.handlers.get(kind));
        tracing::trace!(
            key = placeholder.key,
            kind = placeholder.kind.unwrap_or_default(),
            handled = handler.is_some(),
            "placeholder"
        );
        match handler {
            Some(handler) => handler.handle(HandlerCall {
                value: &value,
                format: placeholder.format_or_empty(),
                locale: &self.locale,
                values,
                recurse: Recurse::new(self),
            }),
            None => Ok(Segment::Value(value.into_owned())),
        }
    }

    fn lock_cache(&self) -> MutexGuard<'_, FormatCache> {
        // The cache holds no invariants a panicking holder could break.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builder for [`MessageFormatter`].
#[derive(Debug)]
pub struct FormatterBuilder {
    locale: String,
    handlers: TypeHandlers,
    cache_capacity: usize,
}

impl FormatterBuilder {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            handlers: TypeHandlers::new(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// Register one handler.
    #[must_use]
    pub fn handler<H>(mut self, name: impl Into<String>, handler: H) -> Self
    where
        H: TypeHandler + 'static,
    {
        self.handlers.register(name, handler);
        self
    }

    /// Register one closure handler.
    #[must_use]
    pub fn handler_fn<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(HandlerCall<'_>) -> Result<Segment> + Send + Sync + 'static,
    {
        self.handlers.register_fn(name, handler);
        self
    }

    /// Replace the whole registry.
    #[must_use]
    pub fn handlers(mut self, handlers: TypeHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Maximum number of cached `format` results; 0 disables the cache.
    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    #[must_use]
    pub fn build(self) -> MessageFormatter {
        MessageFormatter {
            locale: self.locale,
            handlers: self.handlers,
            cache: Mutex::new(FormatCache::new(self.cache_capacity)),
        }
    }
}
