#![forbid(unsafe_code)]

//! Structured result of processing a message.
//!
//! A [`Segment`] tree keeps literal text, raw values and handler products
//! apart so that callers rendering to something richer than a string (a
//! widget tree, styled spans) can treat each leaf separately. Flattening the
//! tree depth-first and concatenating leaf text gives the formatted string.
//!
//! ```text
//! "Hi {name}, {n, plural, one{# file} other{# files}}!"
//!
//! Seq
//! ├── Text("Hi ")
//! ├── Value("Sam")
//! └── Seq
//!     ├── Text(", ")
//!     ├── Seq [Text("3"), Text(" files")]   <- plural handler output
//!     └── Seq [Text("!")]
//! ```

use std::any::Any;
use std::fmt::{self, Write as _};
use std::sync::Arc;

use crate::value::Value;

/// Opaque handler output that renders itself as text.
///
/// Implemented for every `Debug + Display + Send + Sync + 'static` type, so
/// handlers can return their own node types and renderers can downcast them
/// back with [`Segment::downcast_custom`].
pub trait CustomSegment: fmt::Debug + fmt::Display + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T> CustomSegment for T
where
    T: fmt::Debug + fmt::Display + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone)]
pub enum Segment {
    /// Literal text from the message or produced by a handler.
    Text(String),
    /// A resolved value substituted without a handler.
    Value(Value),
    /// Handler-specific node.
    Custom(Arc<dyn CustomSegment>),
    /// Ordered, possibly nested, sequence.
    Seq(Vec<Segment>),
}

impl Segment {
    /// The empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Seq(Vec::new())
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn custom<T>(node: T) -> Self
    where
        T: fmt::Debug + fmt::Display + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(node))
    }

    /// Downcast a `Custom` leaf to the handler's concrete type.
    #[must_use]
    pub fn downcast_custom<T: 'static>(&self) -> Option<&T> {
        match self {
            Self::Custom(node) => (**node).as_any().downcast_ref(),
            _ => None,
        }
    }

    /// Depth-first iterator over every non-`Seq` leaf.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![std::slice::from_ref(self).iter()],
        }
    }

    /// True when flattening would produce no leaves or only empty text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves().all(|leaf| match leaf {
            Self::Text(text) => text.is_empty(),
            Self::Value(value) => value.to_string().is_empty(),
            Self::Custom(node) => node.to_string().is_empty(),
            Self::Seq(_) => true,
        })
    }

    /// Append the flattened text of this tree to `out`.
    pub fn flatten_into(&self, out: &mut String) {
        for leaf in self.leaves() {
            match leaf {
                Self::Text(text) => out.push_str(text),
                // Writing into a String cannot fail.
                Self::Value(value) => {
                    let _ = write!(out, "{value}");
                }
                Self::Custom(node) => {
                    let _ = write!(out, "{node}");
                }
                Self::Seq(_) => {}
            }
        }
    }

    /// Flattened text of this tree.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for leaf in self.leaves() {
            match leaf {
                Self::Text(text) => f.write_str(text)?,
                Self::Value(value) => write!(f, "{value}")?,
                Self::Custom(node) => write!(f, "{node}")?,
                Self::Seq(_) => {}
            }
        }
        Ok(())
    }
}

// Custom nodes are compared by identity.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            (Self::Seq(a), Self::Seq(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for Segment {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Vec<Segment>> for Segment {
    fn from(items: Vec<Segment>) -> Self {
        Self::Seq(items)
    }
}

/// Iterator returned by [`Segment::leaves`].
///
/// Walks with an explicit stack, so deep trees do not grow the call stack.
#[derive(Debug)]
pub struct Leaves<'a> {
    stack: Vec<std::slice::Iter<'a, Segment>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Segment;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(Segment::Seq(items)) => self.stack.push(items.iter()),
                Some(leaf) => return Some(leaf),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Link {
        href: &'static str,
        label: &'static str,
    }

    impl fmt::Display for Link {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label)
        }
    }

    fn sample() -> Segment {
        Segment::Seq(vec![
            Segment::text("Hi "),
            Segment::Value(Value::from("Sam")),
            Segment::Seq(vec![
                Segment::text(", "),
                Segment::Seq(vec![Segment::text("3"), Segment::text(" files")]),
                Segment::Seq(vec![Segment::text("!")]),
            ]),
        ])
    }

    #[test]
    fn flatten_is_depth_first_in_order() {
        assert_eq!(sample().to_text(), "Hi Sam, 3 files!");
        assert_eq!(sample().to_string(), "Hi Sam, 3 files!");
    }

    #[test]
    fn leaves_skip_sequences() {
        let leaves: Vec<_> = sample().leaves().cloned().collect();
        assert_eq!(leaves.len(), 6);
        assert!(leaves.iter().all(|leaf| !matches!(leaf, Segment::Seq(_))));
    }

    #[test]
    fn empty_sequences() {
        assert!(Segment::empty().is_empty());
        assert!(Segment::Seq(vec![Segment::empty(), Segment::text("")]).is_empty());
        assert!(!sample().is_empty());
        assert_eq!(Segment::empty().to_text(), "");
    }

    #[test]
    fn custom_nodes_render_and_downcast() {
        let node = Segment::custom(Link {
            href: "https://example.org",
            label: "docs",
        });
        let tree = Segment::Seq(vec![Segment::text("see "), node.clone()]);
        assert_eq!(tree.to_text(), "see docs");
        let link = node.downcast_custom::<Link>().expect("link node");
        assert_eq!(link.href, "https://example.org");
        assert!(node.downcast_custom::<String>().is_none());
        assert_eq!(node, node.clone());
    }

    #[test]
    fn deep_nesting_flattens_without_recursion() {
        let mut tree = Segment::text("x");
        for _ in 0..10_000 {
            tree = Segment::Seq(vec![tree]);
        }
        assert_eq!(tree.to_text(), "x");
        // Unwind by hand so the test does not depend on recursive drop depth.
        let mut current = tree;
        while let Segment::Seq(mut items) = current {
            current = items.pop().unwrap_or_default();
        }
    }
}
