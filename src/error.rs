use thiserror::Error;

pub type Result<T, E = crate::Error> = std::result::Result<T, E>;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("cannot scan an empty input string")]
    EmptyInput,
    #[error("transition rule under token {owner} declares no 'from' groups")]
    EmptyFromGroups { owner: String },
    #[error("transition rule under token {owner} declares no 'to' groups")]
    EmptyToGroups { owner: String },
    #[error("illegal transition {from} -> {to} at character {offset} while scanning token {token}")]
    IllegalTransition {
        token: String,
        from: String,
        to: String,
        offset: usize,
    },
}

impl Error {
    /// Renders the offending scan context into a non-generic error value.
    pub(crate) fn illegal_transition(
        token: &impl std::fmt::Debug,
        from: &impl std::fmt::Debug,
        to: &impl std::fmt::Debug,
        offset: usize,
    ) -> Self {
        Self::IllegalTransition {
            token: format!("{token:?}"),
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            offset,
        }
    }
}
