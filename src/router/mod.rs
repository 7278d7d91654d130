mod captures;
mod compile;
mod error;
mod imp;
mod table;

pub use self::captures::{OwnedParams, Params};
pub use self::error::RouterError;

use self::compile::Matcher;
use self::table::RuleTable;

use crate::verb::Verb;

#[derive(Debug)]
pub struct Router<T> {
    table: RuleTable<T>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The value a rule resolves to on a successful match.
#[derive(Debug)]
pub enum RouteTarget<T> {
    /// An opaque handler handed back to the caller as-is.
    Callable(T),
    /// A template string, possibly embedding `<name>` tokens, or a
    /// qualified `"Class|method"` reference for an [`Invoker`].
    ///
    /// [`Invoker`]: crate::Invoker
    Text(Box<str>),
}

impl<T> RouteTarget<T> {
    pub fn text(s: impl Into<Box<str>>) -> Self {
        RouteTarget::Text(s.into())
    }
}

#[derive(Debug)]
struct Rule<T> {
    verb: Verb,
    matcher: Matcher,
    target: RouteTarget<T>,
    pattern_params: Vec<Box<str>>,
}

#[derive(Debug)]
pub struct Resolved<'r, 'p, T> {
    pub target: ResolvedTarget<'r, T>,
    pub params: Params<'p>,
}

#[derive(Debug)]
pub enum ResolvedTarget<'r, T> {
    Callable(&'r T),
    /// The rule's text target, with captured template params substituted in.
    Text(String),
}

impl<T> RouteTarget<T> {
    fn as_resolved(&self) -> ResolvedTarget<'_, T> {
        match self {
            RouteTarget::Callable(t) => ResolvedTarget::Callable(t),
            RouteTarget::Text(t) => ResolvedTarget::Text(t.to_string()),
        }
    }
}
