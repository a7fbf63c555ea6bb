//! Symdiff computes symbolic derivatives of one-variable algebraic expressions
//! given as text. An expression is built from `+`, `-`, `*`, `/`, `^` (or its
//! synonym `**`), parentheses, single-letter identifiers, integer literals, and the
//! unary functions `sin`, `cos`, `exp`, and `log`. The derivative is taken with
//! respect to the distinguished variable `x`; every other letter and every numeral
//! is treated as a constant.
//!
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! assert_eq!(symdiff::differentiate("(sin(x)+2)")?, "cos(x)*1+0");
//! assert_eq!(symdiff::differentiate("4")?, "0");
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! As soon as an expression contains a binary operator it has to be wrapped in
//! parentheses top-to-bottom, and exponents have to be literal integers greater or
//! equal 1. No simplification is applied to the result; `*1` factors and `+0`
//! summands stay as the rewrite rules produced them. Malformed input never yields a
//! partial result, the first failure terminates the pipeline with a
//! [`DiffError`](DiffError).
//!
//! The recognized function names are a configuration value. A custom set can be
//! passed via [`differentiate_with`](differentiate_with); names without a
//! differentiation rule pass the parser and fail once the engine encounters them.
//!
//! ```rust
//! use symdiff::{differentiate_with, DiffError, FunctionSet};
//! let funcs = FunctionSet::new(&["sin", "sinh"]);
//! let result = differentiate_with("(sinh(x)+1)", &funcs);
//! assert_eq!(result, Err(DiffError::UnimplementedFunction("sinh".to_string())));
//! ```
//!
//! Parsed expression trees are also available directly via [`Expr`](Expr), e.g.,
//! for structural comparison of re-parsed output.
//!
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use std::str::FromStr;
//! use symdiff::Expr;
//! let expr = Expr::from_str("(x+1)*x")?;
//! assert_eq!(Expr::from_str(&expr.unparse())?, expr);
//! #
//! #     Ok(())
//! # }
//! ```

mod definitions;
mod expression;
mod operators;
mod parser;
mod partial;
mod result;

pub use expression::Expr;
pub use operators::{BinOp, FunctionSet};
pub use result::{DiffError, DiffResult};

/// Differentiates an expression given as text with respect to `x` and returns the
/// derivative as text, with the default function set {sin, cos, exp, log}.
///
/// # Arguments
///
/// * `text` - expression to be differentiated
///
/// # Errors
///
/// One of the kinds of [`DiffError`](DiffError); diagnostics are informational, the
/// programmatic contract is only that no derivative is returned.
///
pub fn differentiate(text: &str) -> DiffResult<String> {
    differentiate_with(text, &FunctionSet::default())
}

/// Differentiates an expression with a custom set of recognized function names. See
/// [`differentiate`](differentiate).
pub fn differentiate_with(text: &str, funcs: &FunctionSet) -> DiffResult<String> {
    parser::check_brackets(text)?;
    let stripped = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();
    let tokens = parser::tokenize(&stripped, funcs)?;
    parser::check_bracket_wrapping(&tokens)?;
    let expr = expression::parse::parse_tokens(&tokens)?;
    let derivative = partial::differentiate(&expr)?;
    Ok(derivative.unparse())
}

#[cfg(test)]
mod tests {
    use super::{differentiate, DiffError};

    #[test]
    fn test_pipeline_order() {
        // brackets are checked before tokenizing
        assert_eq!(
            differentiate("(sinx"),
            Err(DiffError::MismatchedBrackets)
        );
        // tokenizing happens before the wrapping check
        assert_eq!(
            differentiate("sinx+1"),
            Err(DiffError::UnknownMultiCharToken("sinx".to_string()))
        );
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert_eq!(
            differentiate("( sin( x ) + 2 )").unwrap(),
            differentiate("(sin(x)+2)").unwrap()
        );
    }
}
