use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameters captured from the matched path, restricted to the rule's
/// pattern params. Borrows the path it was matched against.
#[derive(Debug)]
pub struct Params<'a> {
    pub(super) buf: SmallVec<[(&'a str, &'a str); 8]>,
}

impl Params<'_> {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }
}

impl<'a> Deref for Params<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl Params<'_> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }
}

/// Self-contained copy of [`Params`] for contexts that outlive the matched
/// path, such as handler futures. Stores the path once and indexes values
/// by offset.
#[derive(Debug, Clone)]
pub struct OwnedParams {
    path: Option<String>,
    offset: Vec<(Box<str>, usize, usize)>, // (name, start, end)
}

impl OwnedParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        let path = self.path.as_deref()?;
        self.offset
            .iter()
            .find_map(|&(ref n, s, e)| if &**n == name { Some(&path[s..e]) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn len(&self) -> usize {
        self.offset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let path = self.path.as_deref().unwrap_or("");
        self.offset
            .iter()
            .map(move |&(ref n, s, e)| (&**n, &path[s..e]))
    }
}

impl OwnedParams {
    pub(crate) fn empty() -> Self {
        Self {
            path: None,
            offset: Vec::new(),
        }
    }

    /// `params` values must be substrings of `path`.
    pub(crate) fn new(path: &str, params: &Params<'_>) -> Self {
        let base = path.as_ptr() as usize;
        let offset: Vec<(Box<str>, usize, usize)> = params
            .iter()
            .map(|&(name, value)| {
                let start = (value.as_ptr() as usize) - base;
                (name.into(), start, start + value.len())
            })
            .collect();
        let path = if offset.is_empty() {
            None
        } else {
            Some(path.to_owned())
        };
        Self { path, offset }
    }
}
