use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// This will be thrown at you if something within Symdiff went wrong. Ok, obviously it is
/// not an exception, so thrown needs to be understood figuratively. Every pipeline stage
/// fails with one of these kinds and the first failure terminates the whole run.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum DiffError {
    /// Parentheses of the raw input are unbalanced.
    MismatchedBrackets,
    /// A multi-letter run of the input matches no recognized function name.
    UnknownMultiCharToken(String),
    /// The token sequence contains an operator but is not wrapped in parentheses
    /// top-to-bottom.
    BracketWrappingRequired,
    /// The right operand of `^`/`**` is not a literal integer greater or equal 1.
    InvalidExponent(String),
    /// Generic grammar violation such as leftover tokens or a missing operand.
    BadFormat(String),
    /// A function name was parsed for which no differentiation rule exists.
    UnimplementedFunction(String),
}

impl Display for DiffError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DiffError::MismatchedBrackets => write!(f, "mismatched brackets"),
            DiffError::UnknownMultiCharToken(term) => {
                write!(f, "multi-character unknown '{}'", term)
            }
            DiffError::BracketWrappingRequired => {
                write!(f, "expressions with operators need to be wrapped in brackets")
            }
            DiffError::InvalidExponent(term) => {
                write!(f, "exponent '{}' is not a literal integer >= 1", term)
            }
            DiffError::BadFormat(msg) => write!(f, "bad format, {}", msg),
            DiffError::UnimplementedFunction(name) => {
                write!(f, "unimplemented differential on function '{}'", name)
            }
        }
    }
}
impl Error for DiffError {}

/// Symdiff's result type with [`DiffError`](DiffError) as error type.
pub type DiffResult<U> = Result<U, DiffError>;
