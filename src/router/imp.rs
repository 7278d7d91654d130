use super::compile::{self, Matcher};
use super::error::RouterError;
use super::table::RuleTable;
use super::{OwnedParams, Params, Resolved, ResolvedTarget, RouteTarget, Router, Rule};

use crate::request::Request;
use crate::verb::Verb;

use tracing::{debug, warn};

macro_rules! define_verb {
    ($name:tt, $verb:tt) => {
        pub fn $name(
            &mut self,
            pattern: &str,
            target: RouteTarget<T>,
        ) -> Result<&mut Self, RouterError> {
            self.try_rule(Verb::$verb, pattern, target)
        }
    };
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self {
            table: RuleTable::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Registers a rule, panicking on rejection.
    pub fn rule(&mut self, verb: Verb, pattern: &str, target: RouteTarget<T>) -> &mut Self {
        if let Err(e) = self.insert_rule(verb, pattern, target) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_rule(
        &mut self,
        verb: Verb,
        pattern: &str,
        target: RouteTarget<T>,
    ) -> Result<&mut Self, RouterError> {
        self.insert_rule(verb, pattern, target)?;
        Ok(self)
    }

    /// Registers with the verb given as text, matched case-insensitively.
    pub fn try_route(
        &mut self,
        verb: &str,
        pattern: &str,
        target: RouteTarget<T>,
    ) -> Result<&mut Self, RouterError> {
        self.try_rule(verb.parse()?, pattern, target)
    }

    define_verb!(get, Get);
    define_verb!(head, Head);
    define_verb!(post, Post);
    define_verb!(put, Put);
    define_verb!(patch, Patch);
    define_verb!(delete, Delete);
    define_verb!(options, Options);
    define_verb!(any, Any);

    /// Deletes the rule registered under `pattern`, if any.
    pub fn delete_rule(&mut self, pattern: &str) -> &mut Self {
        self.table.remove(pattern);
        self
    }

    /// Resolves `(method, path)` against the rule table.
    ///
    /// The exact phase compares rule keys byte-for-byte against `path`: keys
    /// are taken as literal strings and are never re-parsed for tokens, even
    /// when the same rule also compiled a regex. This is a deliberate fast
    /// path, behaviorally an anchored literal match. Only when it misses are
    /// the compiled rules scanned in registration order; the first anchored
    /// match wins.
    pub fn resolve<'s: 'p, 'p>(&'s self, method: &str, path: &'p str) -> Option<Resolved<'s, 'p, T>> {
        if let Some(rule) = self.table.get_exact(path) {
            if rule.verb.accepts(method) {
                debug!(method = %method, path = %path, "exact rule matched");
                return Some(Resolved {
                    target: rule.target.as_resolved(),
                    params: Params::new(),
                });
            }
        }

        for (pattern, rule) in self.table.entries() {
            if !rule.verb.accepts(method) {
                continue;
            }
            let regex = match &rule.matcher {
                Matcher::Regex(r) => r,
                Matcher::Literal => continue,
            };
            let caps = match regex.captures(path) {
                Some(c) => c,
                None => continue,
            };

            let target = match &rule.target {
                RouteTarget::Callable(t) => ResolvedTarget::Callable(t),
                RouteTarget::Text(text) => {
                    ResolvedTarget::Text(compile::substitute(text, &caps))
                }
            };

            let mut params = Params::new();
            for name in &rule.pattern_params {
                if let Some(m) = caps.name(name) {
                    params.buf.push((&**name, m.as_str()));
                }
            }

            debug!(method = %method, path = %path, pattern = %pattern, "rule matched");
            return Some(Resolved { target, params });
        }

        warn!(method = %method, path = %path, "no rule matched");
        None
    }

    /// Normalizes `req` and resolves it. Params are copied out since the
    /// normalized path is derived here.
    pub fn dispatch(&self, req: &Request) -> Option<(ResolvedTarget<'_, T>, OwnedParams)> {
        let path = req.path();
        let resolved = self.resolve(req.method(), &path)?;
        let params = OwnedParams::new(&path, &resolved.params);
        Some((resolved.target, params))
    }

    fn insert_rule(
        &mut self,
        verb: Verb,
        pattern: &str,
        target: RouteTarget<T>,
    ) -> Result<(), RouterError> {
        if pattern.is_empty() {
            return Err(RouterError::EmptyPattern);
        }
        let target_text = match &target {
            RouteTarget::Text(text) if text.is_empty() => return Err(RouterError::EmptyTarget),
            RouteTarget::Text(text) => Some(&**text),
            RouteTarget::Callable(_) => None,
        };

        let compiled = compile::compile(pattern, target_text)?;

        debug!(verb = %verb, pattern = %pattern, "rule registered");

        self.table.insert(
            pattern,
            Rule {
                verb,
                matcher: compiled.matcher,
                target,
                pattern_params: compiled.pattern_params,
            },
        );
        Ok(())
    }
}
