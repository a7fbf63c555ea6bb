use super::Expr;
use crate::operators::BinOp;
use crate::parser::{Paren, Token};
use crate::{DiffError, DiffResult};
use std::rc::Rc;

/// Consumes the full token sequence under the four-level precedence grammar and
/// returns the root of the resulting tree.
///
/// # Errors
///
/// [`DiffError::BadFormat`](DiffError::BadFormat) for grammar violations including
/// leftover tokens, [`DiffError::InvalidExponent`](DiffError::InvalidExponent) if the
/// right operand of an indexing operator is not a literal integer >= 1.
///
pub fn parse_tokens(tokens: &[Token]) -> DiffResult<Rc<Expr>> {
    let (root, pos) = as_level(tokens, 0)?;
    if pos != tokens.len() {
        return Err(DiffError::BadFormat(format!(
            "leftover tokens starting at '{}'",
            tokens[pos].repr()
        )));
    }
    Ok(root)
}

/// Addition/subtraction, left-associative chain over [`dm_level`](dm_level).
fn as_level(tokens: &[Token], pos: usize) -> DiffResult<(Rc<Expr>, usize)> {
    let (mut left, mut pos) = dm_level(tokens, pos)?;
    while let Some(Token::Op(op @ (BinOp::Add | BinOp::Sub))) = tokens.get(pos) {
        let (right, next) = dm_level(tokens, pos + 1)?;
        left = Expr::bin(*op, left, right);
        pos = next;
    }
    Ok((left, pos))
}

/// Multiplication/division, left-associative chain over [`idx_level`](idx_level).
fn dm_level(tokens: &[Token], pos: usize) -> DiffResult<(Rc<Expr>, usize)> {
    let (mut left, mut pos) = idx_level(tokens, pos)?;
    while let Some(Token::Op(op @ (BinOp::Mul | BinOp::Div))) = tokens.get(pos) {
        let (right, next) = idx_level(tokens, pos + 1)?;
        left = Expr::bin(*op, left, right);
        pos = next;
    }
    Ok((left, pos))
}

/// Indexing with `^` or `**`, right-associative single application. The exponent
/// subtree must reduce to a digit-string leaf with value >= 1, checked here at
/// parse time so the power rule of the engine never sees anything else.
fn idx_level(tokens: &[Token], pos: usize) -> DiffResult<(Rc<Expr>, usize)> {
    let (left, pos) = atom_level(tokens, pos)?;
    if let Some(Token::Op(BinOp::Pow)) = tokens.get(pos) {
        let (right, next) = idx_level(tokens, pos + 1)?;
        check_exponent(&right)?;
        return Ok((Expr::bin(BinOp::Pow, left, right), next));
    }
    Ok((left, pos))
}

/// The exponent has to be a digit-string with a nonzero digit somewhere. Deciding on
/// the string keeps arbitrarily long literals from overflowing any integer parse.
fn check_exponent(exponent: &Expr) -> DiffResult<()> {
    match exponent {
        Expr::Leaf(text)
            if !text.is_empty()
                && text.bytes().all(|b| b.is_ascii_digit())
                && text.bytes().any(|b| b != b'0') =>
        {
            Ok(())
        }
        _ => Err(DiffError::InvalidExponent(exponent.unparse())),
    }
}

/// Resolves function applications, parenthesized groups, and leaf values. Operators,
/// closing parentheses, and running out of tokens all fail here, which blocks inputs
/// like `(a+)`.
fn atom_level(tokens: &[Token], pos: usize) -> DiffResult<(Rc<Expr>, usize)> {
    match tokens.get(pos) {
        Some(Token::Func(name)) => {
            if tokens.get(pos + 1) != Some(&Token::Paren(Paren::Open)) {
                return Err(DiffError::BadFormat(format!(
                    "function '{}' must be followed by '('",
                    name
                )));
            }
            let (arg, after) = as_level(tokens, pos + 2)?;
            match tokens.get(after) {
                Some(Token::Paren(Paren::Close)) => Ok((Expr::func(*name, arg), after + 1)),
                _ => Err(DiffError::BadFormat(format!(
                    "missing ')' after argument of '{}'",
                    name
                ))),
            }
        }
        Some(Token::Paren(Paren::Open)) => {
            let (inner, after) = as_level(tokens, pos + 1)?;
            match tokens.get(after) {
                Some(Token::Paren(Paren::Close)) => Ok((inner, after + 1)),
                _ => Err(DiffError::BadFormat("missing closing parenthesis".to_string())),
            }
        }
        Some(Token::Val(term)) => {
            let is_digits = !term.is_empty() && term.bytes().all(|b| b.is_ascii_digit());
            let is_letter = term.len() == 1 && term.bytes().all(|b| b.is_ascii_alphabetic());
            if is_digits || is_letter {
                Ok((Expr::leaf(*term), pos + 1))
            } else {
                Err(DiffError::BadFormat(format!("cannot parse term '{}'", term)))
            }
        }
        Some(token) => Err(DiffError::BadFormat(format!(
            "expected a value but found '{}'",
            token.repr()
        ))),
        None => Err(DiffError::BadFormat(
            "expected a value but the input ended".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_tokens;
    use crate::expression::Expr;
    use crate::operators::{BinOp, FunctionSet};
    use crate::parser::tokenize;
    use crate::DiffError;
    use std::rc::Rc;

    fn parse(text: &str) -> Result<Rc<Expr>, DiffError> {
        parse_tokens(&tokenize(text, &FunctionSet::default())?)
    }

    #[test]
    fn test_precedence_levels() {
        assert_eq!(
            parse("x+2*x").unwrap(),
            Expr::bin(
                BinOp::Add,
                Expr::leaf("x"),
                Expr::bin(BinOp::Mul, Expr::leaf("2"), Expr::leaf("x"))
            )
        );
        // left-associative chains
        assert_eq!(
            parse("a-b-c").unwrap(),
            Expr::bin(
                BinOp::Sub,
                Expr::bin(BinOp::Sub, Expr::leaf("a"), Expr::leaf("b")),
                Expr::leaf("c")
            )
        );
        // brackets override
        assert_eq!(
            parse("(x+2)*x").unwrap(),
            Expr::bin(
                BinOp::Mul,
                Expr::bin(BinOp::Add, Expr::leaf("x"), Expr::leaf("2")),
                Expr::leaf("x")
            )
        );
    }

    #[test]
    fn test_functions() {
        assert_eq!(
            parse("sin(x)").unwrap(),
            Expr::func("sin", Expr::leaf("x"))
        );
        assert_eq!(
            parse("cos(x+2)").unwrap(),
            Expr::func(
                "cos",
                Expr::bin(BinOp::Add, Expr::leaf("x"), Expr::leaf("2"))
            )
        );
        // a function name needs its parentheses
        assert!(matches!(parse("sin"), Err(DiffError::BadFormat(_))));
        assert!(matches!(parse("sin+2"), Err(DiffError::BadFormat(_))));
    }

    #[test]
    fn test_indexing() {
        let squared = Expr::bin(BinOp::Pow, Expr::leaf("x"), Expr::leaf("2"));
        assert_eq!(parse("x^2").unwrap(), squared);
        assert_eq!(parse("x**2").unwrap(), parse("x^2").unwrap());
        assert_eq!(
            parse("sin(x)^2").unwrap(),
            Expr::bin(BinOp::Pow, Expr::func("sin", Expr::leaf("x")), Expr::leaf("2"))
        );
        assert!(matches!(parse("x^x"), Err(DiffError::InvalidExponent(_))));
        assert!(matches!(parse("x^0"), Err(DiffError::InvalidExponent(_))));
        // a parenthesized exponent collapses to its inner leaf and passes the check
        assert_eq!(parse("x^(2)").unwrap(), squared);
        // a negated exponent never reaches the exponent check
        assert!(matches!(parse("x^-2"), Err(DiffError::BadFormat(_))));
        // long exponents do not overflow
        assert!(parse("x^123456789012345678901234567890").is_ok());
    }

    #[test]
    fn test_bad_formats() {
        assert!(matches!(parse("a+"), Err(DiffError::BadFormat(_))));
        assert!(matches!(parse("-x"), Err(DiffError::BadFormat(_))));
        assert!(matches!(parse("()"), Err(DiffError::BadFormat(_))));
        assert!(matches!(parse(""), Err(DiffError::BadFormat(_))));
        assert!(matches!(parse("2x"), Err(DiffError::BadFormat(_))));
        assert!(matches!(parse("(x))"), Err(DiffError::BadFormat(_))));
        assert!(matches!(parse("x y"), Err(DiffError::BadFormat(_))));
    }
}
