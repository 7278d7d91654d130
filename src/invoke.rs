use crate::router::ResolvedTarget;

use std::collections::HashMap;

/// Failure to turn a resolved target into a handler. Every variant is
/// terminal at the request boundary, equivalent to a 404.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("qualified target is malformed: {0:?}")]
    MalformedTarget(String),

    #[error("no function registered under {0:?}")]
    UnknownFunction(String),

    #[error("no method registered under {0:?}")]
    UnknownMethod(String),
}

/// Registry mapping textual targets to handlers.
///
/// Callable targets pass through untouched. Text targets containing `|` are
/// qualified `"Class|method"` references; anything else is looked up as a
/// plain function name.
#[derive(Debug)]
pub struct Invoker<T> {
    functions: HashMap<Box<str>, T>,
    methods: HashMap<Box<str>, T>,
}

impl<T> Default for Invoker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Invoker<T> {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    /// Registers a handler under a global function name.
    pub fn function(&mut self, name: &str, handler: T) -> &mut Self {
        self.functions.insert(name.into(), handler);
        self
    }

    /// Registers a handler under a qualified `Class|method` reference.
    pub fn method(&mut self, class: &str, method: &str, handler: T) -> &mut Self {
        let key = format!("{}|{}", class, method);
        self.methods.insert(key.into_boxed_str(), handler);
        self
    }

    /// Resolves a dispatched target to a handler.
    pub fn lookup<'a>(&'a self, target: &ResolvedTarget<'a, T>) -> Result<&'a T, InvokeError> {
        match target {
            ResolvedTarget::Callable(t) => Ok(*t),
            ResolvedTarget::Text(text) => self.lookup_text(text),
        }
    }

    fn lookup_text(&self, text: &str) -> Result<&T, InvokeError> {
        if text.contains('|') {
            let mut split = text.splitn(2, '|');
            let class = split.next().unwrap_or("");
            let method = split.next().unwrap_or("");
            if class.is_empty() || method.is_empty() || method.contains('|') {
                return Err(InvokeError::MalformedTarget(text.to_owned()));
            }
            return self
                .methods
                .get(text)
                .ok_or_else(|| InvokeError::UnknownMethod(text.to_owned()));
        }
        self.functions
            .get(text)
            .ok_or_else(|| InvokeError::UnknownFunction(text.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::{InvokeError, Invoker};
    use crate::router::ResolvedTarget;

    fn text(s: &str) -> ResolvedTarget<'static, i32> {
        ResolvedTarget::Text(s.to_owned())
    }

    #[test]
    fn callable_passes_through() {
        let invoker: Invoker<i32> = Invoker::new();
        let handler = 7;
        assert_eq!(*invoker.lookup(&ResolvedTarget::Callable(&handler)).unwrap(), 7);
    }

    #[test]
    fn function_and_method_lookup() {
        let mut invoker: Invoker<i32> = Invoker::new();
        invoker.function("greet", 1).method("UserController", "show", 2);

        assert_eq!(*invoker.lookup(&text("greet")).unwrap(), 1);
        assert_eq!(*invoker.lookup(&text("UserController|show")).unwrap(), 2);

        assert!(matches!(
            invoker.lookup(&text("nope")),
            Err(InvokeError::UnknownFunction(_))
        ));
        assert!(matches!(
            invoker.lookup(&text("UserController|update")),
            Err(InvokeError::UnknownMethod(_))
        ));
    }

    #[test]
    fn malformed_qualified_targets() {
        let mut invoker: Invoker<i32> = Invoker::new();
        invoker.method("A", "b", 1);

        for bad in &["|b", "A|", "|", "A|b|c"] {
            assert!(matches!(
                invoker.lookup(&text(bad)),
                Err(InvokeError::MalformedTarget(_))
            ));
        }
    }
}
