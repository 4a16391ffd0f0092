#![forbid(unsafe_code)]

//! Type handler contract and the name → handler registry.
//!
//! A placeholder `{key, type, format}` whose `type` names a registered
//! handler is handed to that handler together with the resolved value, the
//! raw `format` body, the formatter's locale, the full value mapping, and a
//! [`Recurse`] handle for interpreting nested message syntax (typically a
//! selected case body).

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::formatter::MessageFormatter;
use crate::segment::Segment;
use crate::value::{Value, Values};

/// Everything a handler receives for one placeholder.
#[derive(Debug, Clone, Copy)]
pub struct HandlerCall<'a> {
    /// Resolved value for the placeholder key (missing keys are empty text).
    pub value: &'a Value,
    /// Raw format body; empty when the block has no third field.
    pub format: &'a str,
    pub locale: &'a str,
    pub values: &'a Values,
    pub recurse: Recurse<'a>,
}

/// Handle back into the formatter that invoked a handler.
#[derive(Clone, Copy)]
pub struct Recurse<'a> {
    formatter: &'a MessageFormatter,
}

impl<'a> Recurse<'a> {
    pub(crate) fn new(formatter: &'a MessageFormatter) -> Self {
        Self { formatter }
    }

    /// Process `message` exactly as [`MessageFormatter::process`] would on
    /// the same formatter.
    pub fn process(&self, message: &str, values: &Values) -> Result<Segment> {
        self.formatter.process(message, values)
    }
}

impl fmt::Debug for Recurse<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recurse")
            .field("locale", &self.formatter.locale())
            .finish_non_exhaustive()
    }
}

/// A named formatter for one placeholder type.
///
/// Errors returned here reach the caller of `format`/`process` unchanged.
pub trait TypeHandler: Send + Sync {
    fn handle(&self, call: HandlerCall<'_>) -> Result<Segment>;
}

impl<F> TypeHandler for F
where
    F: Fn(HandlerCall<'_>) -> Result<Segment> + Send + Sync,
{
    fn handle(&self, call: HandlerCall<'_>) -> Result<Segment> {
        self(call)
    }
}

/// Registry of type handlers keyed by type name.
#[derive(Clone, Default)]
pub struct TypeHandlers {
    handlers: FxHashMap<String, Arc<dyn TypeHandler>>,
}

impl TypeHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous one.
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H) -> &mut Self
    where
        H: TypeHandler + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    /// Register a closure. Spelled out separately so the closure's argument
    /// type is inferred.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(HandlerCall<'_>) -> Result<Segment> + Send + Sync + 'static,
    {
        self.register(name, handler)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn TypeHandler> {
        self.handlers.get(name).map(|handler| handler.as_ref())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for TypeHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
