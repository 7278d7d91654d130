use super::Rule;

use std::collections::HashMap;

/// Pattern-keyed rule storage. Registration order is preserved and is the
/// scan order of regex dispatch; the map is a side index for the exact
/// lookup phase.
#[derive(Debug)]
pub(super) struct RuleTable<T> {
    entries: Vec<(Box<str>, Rule<T>)>,
    index: HashMap<Box<str>, usize>,
}

impl<T> RuleTable<T> {
    pub(super) fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts or overwrites. An existing key is replaced wholesale but
    /// keeps its slot in the scan order.
    pub(super) fn insert(&mut self, key: &str, rule: Rule<T>) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 = rule,
            None => {
                self.index.insert(key.into(), self.entries.len());
                self.entries.push((key.into(), rule));
            }
        }
    }

    /// Removes the entry if present; a no-op otherwise.
    pub(super) fn remove(&mut self, key: &str) {
        if let Some(i) = self.index.remove(key) {
            self.entries.remove(i);
            for slot in self.index.values_mut() {
                if *slot > i {
                    *slot -= 1;
                }
            }
        }
    }

    pub(super) fn get_exact(&self, key: &str) -> Option<&Rule<T>> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub(super) fn entries(&self) -> impl Iterator<Item = (&str, &Rule<T>)> {
        self.entries.iter().map(|(key, rule)| (&**key, rule))
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
