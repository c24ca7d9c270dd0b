use std::{error::Error as StdError, fmt, result::Result as StdResult};

/// Caller contract violations. Structural misses ("no block starts here",
/// "no name could be derived") are `Option`s, not errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// Text handed to [`crate::theorem_name`] does not start with a
    /// `theorem` or `lemma` declaration.
    NotADeclaration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADeclaration(code) => {
                let head = code.lines().next().unwrap_or("");
                write!(f, "expected a theorem or lemma declaration, got: {head}")
            }
        }
    }
}

impl StdError for Error {}

pub type Result<T> = StdResult<T, Error>;
