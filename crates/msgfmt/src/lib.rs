#![forbid(unsafe_code)]

//! Message formatting with `{key, type, format}` placeholders.
//!
//! `msgfmt` interprets a practical subset of ICU MessageFormat syntax:
//! balanced `{...}` placeholders carrying a value key, an optional type name
//! and an optional format body. Values are substituted directly; typed
//! placeholders are dispatched to caller-registered [`TypeHandler`]s, which
//! may interpret nested message syntax (case bodies of `select`/`plural`)
//! through the formatter again.
//!
//! # Role
//! The crate is the parsing and interpretation engine only. Concrete
//! handlers, locale rules and rendering targets belong to callers;
//! `msgfmt-handlers` ships `select` and `plural` implementations.
//!
//! # Example
//!
//! ```
//! use msgfmt::{HandlerCall, MessageFormatter, Segment, Values, parse_cases};
//!
//! let formatter = MessageFormatter::builder("en")
//!     .handler_fn("select", |call: HandlerCall<'_>| {
//!         let cases = parse_cases(call.format)?;
//!         let chosen = cases.case(&call.value.to_string()).or(cases.other());
//!         match chosen {
//!             Some(body) => call.recurse.process(body, call.values),
//!             None => Ok(Segment::empty()),
//!         }
//!     })
//!     .build();
//!
//! let values = Values::new().with("n", "yes").with("name", "Sam");
//! let text = formatter
//!     .format("{n, select, yes{Hi {name}} no{Bye}}", &values)
//!     .unwrap();
//! assert_eq!(text, "Hi Sam");
//! ```

pub mod bracket;
pub mod cache;
pub mod cases;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod placeholder;
pub mod segment;
pub mod value;

pub use bracket::find_closing_bracket;
pub use cache::{DEFAULT_CACHE_CAPACITY, FormatCacheStats};
pub use cases::{CaseSet, OTHER, parse_cases};
pub use error::{FormatError, HandlerError, Result};
pub use formatter::{FormatterBuilder, MessageFormatter};
pub use handler::{HandlerCall, Recurse, TypeHandler, TypeHandlers};
pub use placeholder::{Placeholder, split_fields};
pub use segment::{CustomSegment, Leaves, Segment};
pub use value::{Value, Values};
