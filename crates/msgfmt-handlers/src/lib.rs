#![forbid(unsafe_code)]

//! `select` and `plural` type handlers for `msgfmt`.
//!
//! # Role
//! The core engine only defines the handler contract. This crate provides
//! the two branch-based handlers almost every catalog needs, built on
//! [`msgfmt::parse_cases`] and the formatter's recursion handle, plus the
//! integer plural rules they select with.
//!
//! # Example
//!
//! ```
//! use msgfmt::{MessageFormatter, TypeHandlers, Values};
//!
//! let mut handlers = TypeHandlers::new();
//! msgfmt_handlers::register_defaults(&mut handlers);
//! let formatter = MessageFormatter::new("en", handlers);
//!
//! let values = Values::new().with("count", 1);
//! let text = formatter
//!     .format("{count, plural, one{# item} other{# items}}", &values)
//!     .unwrap();
//! assert_eq!(text, "1 item");
//! ```

pub mod plural;
pub mod plural_rule;
pub mod select;

pub use plural::PluralHandler;
pub use plural_rule::{PluralCategory, PluralRule};
pub use select::SelectHandler;

use msgfmt::TypeHandlers;

/// Register [`SelectHandler`] as `select` and [`PluralHandler`] as `plural`.
pub fn register_defaults(handlers: &mut TypeHandlers) -> &mut TypeHandlers {
    handlers
        .register("select", SelectHandler)
        .register("plural", PluralHandler::default())
}

/// A registry holding only the default handlers.
#[must_use]
pub fn default_handlers() -> TypeHandlers {
    let mut handlers = TypeHandlers::new();
    register_defaults(&mut handlers);
    handlers
}
