//! Immutable machine context: named integer counters.
//!
//! Context accompanies a control state and is updated by transition
//! actions. Updates are functional - `with` and `increment` return a new
//! context, the old one is never mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An immutable mapping of named fields to integer counters.
///
/// Fields are kept in an ordered map so two contexts with equal field
/// values compare equal and serialize identically regardless of insertion
/// order - the property the explorer's canonical node keys depend on.
/// Reading an absent field yields 0 (counters start at zero).
///
/// # Example
///
/// ```rust
/// use waypoint::core::Context;
///
/// let ctx = Context::new().with("ordersCompleted", 0);
/// let next = ctx.increment("ordersCompleted");
///
/// assert_eq!(ctx.get("ordersCompleted"), 0); // original unchanged
/// assert_eq!(next.get("ordersCompleted"), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    fields: BTreeMap<String, i64>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Read a field. Absent fields read as 0.
    pub fn get(&self, field: &str) -> i64 {
        self.fields.get(field).copied().unwrap_or(0)
    }

    /// Return a new context with `field` set to `value`.
    pub fn with(&self, field: impl Into<String>, value: i64) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(field.into(), value);
        Self { fields }
    }

    /// Return a new context with `field` incremented by one.
    pub fn increment(&self, field: &str) -> Self {
        self.with(field, self.get(field) + 1)
    }

    /// Iterate fields in canonical (sorted) order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, i64)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Whether the context carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (field, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_read_as_zero() {
        let ctx = Context::new();
        assert_eq!(ctx.get("ordersCanceled"), 0);
    }

    #[test]
    fn with_returns_new_context() {
        let ctx = Context::new().with("a", 1);
        let next = ctx.with("a", 2);

        assert_eq!(ctx.get("a"), 1);
        assert_eq!(next.get("a"), 2);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let ab = Context::new().with("a", 1).with("b", 2);
        let ba = Context::new().with("b", 2).with("a", 1);
        assert_eq!(ab, ba);
    }

    #[test]
    fn increment_adds_one() {
        let ctx = Context::new().increment("n").increment("n");
        assert_eq!(ctx.get("n"), 2);
    }

    #[test]
    fn fields_iterate_sorted() {
        let ctx = Context::new().with("b", 2).with("a", 1);
        let names: Vec<&str> = ctx.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn display_is_canonical() {
        let ctx = Context::new().with("b", 2).with("a", 1);
        assert_eq!(ctx.to_string(), "{a: 1, b: 2}");
    }

    #[test]
    fn serializes_as_plain_map() {
        let ctx = Context::new().with("ordersCompleted", 1);
        let json = serde_json::to_string(&ctx).unwrap();
        assert_eq!(json, "{\"ordersCompleted\":1}");
        let back: Context = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
    }
}
