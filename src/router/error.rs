/// A rejected registration. Dispatch itself never fails with an error;
/// an unmatched request is a plain `None`.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("verb is not one of the recognized methods: {0:?}")]
    UnknownVerb(Box<str>),

    #[error("pattern can not be empty")]
    EmptyPattern,

    #[error("target can not be empty")]
    EmptyTarget,

    #[error("placeholder name is used more than once: {0:?}")]
    DuplicateName(Box<str>),

    #[error("subpattern is not a valid regex: {0}")]
    BadSubpattern(#[from] regex::Error),
}
