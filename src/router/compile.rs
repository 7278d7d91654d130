use super::error::RouterError;

use once_cell::sync::Lazy;
use regex::Regex;

/// Default subpattern: one or more non-separator characters.
const DEFAULT_SUBPATTERN: &str = "[^/]+";

/// `<name>`, `<name:subpattern>` or `<name:>`. Stray `<`/`>` that do not
/// form a well-formed token are left as literal text.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([\w.-]+)(?::([^>]*))?>").unwrap());

/// Bare `<name>` tokens inside a target template.
static TEMPLATE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([\w.-]+)>").unwrap());

#[derive(Debug)]
pub(super) enum Matcher {
    /// Tokenless pattern: the rule key itself is the matcher and the rule
    /// can only be hit by the exact-lookup phase.
    Literal,
    /// Fully anchored regex with one named capture group per token.
    Regex(Regex),
}

pub(super) struct Compiled {
    pub(super) matcher: Matcher,
    pub(super) pattern_params: Vec<Box<str>>,
}

/// Compiles a raw pattern against an (optional) text target.
///
/// Placeholder names found in the target become template params; the
/// remaining pattern tokens become pattern params, both in first-appearance
/// order. Literal text is escaped, the separators at both ends are trimmed
/// and the whole match is anchored.
pub(super) fn compile(pattern: &str, target_text: Option<&str>) -> Result<Compiled, RouterError> {
    let template_params = match target_text {
        Some(text) => scan_template(text),
        None => Vec::new(),
    };

    let trimmed = pattern.trim_matches('/');

    let mut pattern_params: Vec<Box<str>> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();

    let mut source = String::with_capacity(trimmed.len() + 16);
    source.push('^');

    let mut last = 0;
    for caps in TOKEN.captures_iter(trimmed) {
        let token = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str();

        if seen.contains(&name) {
            return Err(RouterError::DuplicateName(name.into()));
        }
        seen.push(name);

        let sub = match caps.get(2) {
            Some(m) if !m.as_str().is_empty() => m.as_str(),
            _ => DEFAULT_SUBPATTERN,
        };

        source.push_str(&regex::escape(&trimmed[last..token.start()]));
        source.push_str("(?P<");
        source.push_str(name);
        source.push('>');
        source.push_str(sub);
        source.push(')');
        last = token.end();

        if !template_params.iter().any(|p| &**p == name) {
            pattern_params.push(name.into());
        }
    }

    if seen.is_empty() {
        return Ok(Compiled {
            matcher: Matcher::Literal,
            pattern_params,
        });
    }

    source.push_str(&regex::escape(&trimmed[last..]));
    source.push('$');

    let regex = Regex::new(&source)?;
    Ok(Compiled {
        matcher: Matcher::Regex(regex),
        pattern_params,
    })
}

/// Substitutes captured values into a text target in one left-to-right
/// pass. Inserted text is never rescanned, so a captured value that itself
/// looks like a token passes through verbatim. Tokens with no matching
/// capture stay literal.
pub(super) fn substitute(template: &str, caps: &regex::Captures<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for m in TEMPLATE_TOKEN.captures_iter(template) {
        let token = m.get(0).unwrap();
        let name = m.get(1).unwrap().as_str();
        if let Some(value) = caps.name(name) {
            out.push_str(&template[last..token.start()]);
            out.push_str(value.as_str());
            last = token.end();
        }
    }
    out.push_str(&template[last..]);
    out
}

fn scan_template(text: &str) -> Vec<Box<str>> {
    let mut names: Vec<Box<str>> = Vec::new();
    for caps in TEMPLATE_TOKEN.captures_iter(text) {
        let name = caps.get(1).unwrap().as_str();
        if !names.iter().any(|p| &**p == name) {
            names.push(name.into());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::{compile, Matcher};

    fn regex_of(pattern: &str, target: Option<&str>) -> regex::Regex {
        match compile(pattern, target).unwrap().matcher {
            Matcher::Regex(r) => r,
            Matcher::Literal => panic!("expected a compiled regex: {:?}", pattern),
        }
    }

    #[test]
    fn tokenless_pattern_stays_literal() {
        let compiled = compile("user/list", Some("UserController|list")).unwrap();
        assert!(matches!(compiled.matcher, Matcher::Literal));
        assert!(compiled.pattern_params.is_empty());
    }

    #[test]
    fn default_subpattern_excludes_separator() {
        let re = regex_of("user/<id>", None);
        assert!(re.is_match("user/42"));
        assert!(!re.is_match("user/42/posts"));
        assert!(!re.is_match("user/"));
    }

    #[test]
    fn explicit_subpattern() {
        let re = regex_of(r"user/<id:\d+>", None);
        assert!(re.is_match("user/42"));
        assert!(!re.is_match("user/abc"));
    }

    #[test]
    fn empty_subpattern_falls_back_to_default() {
        let re = regex_of("user/<id:>", None);
        assert!(re.is_match("user/42"));
        assert!(!re.is_match("user/42/posts"));
    }

    #[test]
    fn substitution_is_a_single_pass() {
        let re = regex_of("<a>/<b>", None);
        let caps = re.captures("<b>/X").unwrap();
        assert_eq!(super::substitute("<a>/<b>", &caps), "<b>/X");
    }

    #[test]
    fn literal_text_is_escaped() {
        let re = regex_of("file/<name>.tar.gz", None);
        assert!(re.is_match("file/backup.tar.gz"));
        assert!(!re.is_match("file/backup_tar_gz"));
    }

    #[test]
    fn surrounding_separators_are_trimmed() {
        let re = regex_of("/user/<id>/", None);
        assert!(re.is_match("user/42"));
    }

    #[test]
    fn params_split_between_template_and_pattern() {
        let compiled = compile("<controller>/<action>/<id>", Some("<controller>/<action>")).unwrap();
        let names = |v: &[Box<str>]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        // names used by the target are not reported as pattern params
        assert_eq!(names(&compiled.pattern_params), ["id"]);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        assert!(compile("<id>/<id>", None).is_err());
    }

    #[test]
    fn bad_subpattern_is_rejected() {
        assert!(compile("user/<id:(unclosed>", None).is_err());
    }

    #[test]
    fn stray_brackets_stay_literal() {
        let compiled = compile("a<b", None).unwrap();
        assert!(matches!(compiled.matcher, Matcher::Literal));

        let re = regex_of("x/<name>/y>z", None);
        assert!(re.is_match("x/q/y>z"));
    }
}
