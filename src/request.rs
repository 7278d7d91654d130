/// A request as the router sees it: a method and the raw request-target.
/// The transport constructs one explicitly; the router keeps no ambient
/// request state.
#[derive(Debug, Clone)]
pub struct Request {
    method: Box<str>,
    target: Box<str>,
}

impl Request {
    pub fn new(method: &str, target: &str) -> Self {
        Self {
            method: method.to_ascii_uppercase().into(),
            target: target.into(),
        }
    }

    /// The method, uppercased.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The raw request-target as supplied.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The normalized path of the request-target.
    pub fn path(&self) -> String {
        normalize_path(&self.target)
    }
}

/// Derives the routable path from a raw request-target.
///
/// The query string and fragment are cut off, percent-escapes are decoded
/// with `+` read as an encoded space, bytes that do not form valid UTF-8 are
/// re-read as a legacy single-byte encoding (never an error), and one
/// leading separator is stripped.
pub fn normalize_path(target: &str) -> String {
    let end = target.find(|c| c == '?' || c == '#').unwrap_or_else(|| target.len());
    // `+` before decoding is the form-style space escape; a literal plus
    // arrives as %2B and survives
    let raw = target[..end].replace('+', " ");

    let bytes = urlencoding::decode_binary(raw.as_bytes()).into_owned();
    let mut path = match String::from_utf8(bytes) {
        Ok(s) => s,
        // assume Latin-1 and widen each byte to its code point; worst case
        // the bytes pass through unchanged, one char per byte
        Err(e) => e.as_bytes().iter().map(|&b| char::from(b)).collect(),
    };

    if path.starts_with('/') {
        path.drain(..1);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::{normalize_path, Request};

    #[test]
    fn query_and_fragment_are_cut() {
        assert_eq!(normalize_path("a%2Fb?x=1#frag"), "a/b");
        assert_eq!(normalize_path("p#frag"), "p");
        assert_eq!(normalize_path("p?"), "p");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn one_leading_separator_is_stripped() {
        assert_eq!(normalize_path("/user/42"), "user/42");
        assert_eq!(normalize_path("//user"), "/user");
        assert_eq!(normalize_path("user"), "user");
    }

    #[test]
    fn percent_decoding() {
        assert_eq!(normalize_path("caf%C3%A9"), "caf\u{e9}");
        assert_eq!(normalize_path("a%20b"), "a b");
    }

    #[test]
    fn plus_decodes_as_space() {
        assert_eq!(normalize_path("a+b"), "a b");
        assert_eq!(normalize_path("a%2Bb"), "a+b");
    }

    #[test]
    fn invalid_utf8_is_transcoded_not_rejected() {
        // %E9 is é in Latin-1 and an invalid UTF-8 sequence on its own
        assert_eq!(normalize_path("caf%E9"), "caf\u{e9}");
        assert_eq!(normalize_path("%A0"), "\u{a0}");
    }

    #[test]
    fn request_method_is_uppercased() {
        let req = Request::new("get", "/user/42?tab=posts");
        assert_eq!(req.method(), "GET");
        assert_eq!(req.path(), "user/42");
    }
}
