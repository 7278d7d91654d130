use crate::router::RouterError;

use std::fmt;
use std::str::FromStr;

/// HTTP verb of a route rule. `Any` matches irrespective of the request
/// method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Any,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Options => "OPTIONS",
            Verb::Any => "ANY",
        }
    }

    /// Whether a rule stored under this verb applies to `method`.
    pub fn accepts(self, method: &str) -> bool {
        match self {
            Verb::Any => true,
            _ => self.as_str().eq_ignore_ascii_case(method),
        }
    }
}

impl FromStr for Verb {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verb = match s.to_ascii_uppercase().as_str() {
            "GET" => Verb::Get,
            "HEAD" => Verb::Head,
            "POST" => Verb::Post,
            "PUT" => Verb::Put,
            "PATCH" => Verb::Patch,
            "DELETE" => Verb::Delete,
            "OPTIONS" => Verb::Options,
            "ANY" => Verb::Any,
            _ => return Err(RouterError::UnknownVerb(s.into())),
        };
        Ok(verb)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "http-router")]
impl std::convert::TryFrom<&http::Method> for Verb {
    type Error = RouterError;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::Verb;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("get".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("Delete".parse::<Verb>().unwrap(), Verb::Delete);
        assert_eq!("ANY".parse::<Verb>().unwrap(), Verb::Any);
        assert!("BREW".parse::<Verb>().is_err());
        assert!("".parse::<Verb>().is_err());
    }

    #[test]
    fn accepts() {
        assert!(Verb::Get.accepts("GET"));
        assert!(Verb::Get.accepts("get"));
        assert!(!Verb::Get.accepts("POST"));
        assert!(Verb::Any.accepts("GET"));
        assert!(Verb::Any.accepts("BREW"));
    }
}
