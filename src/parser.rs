use crate::definitions::N_TOKENS_ON_STACK;
use crate::operators::{BinOp, FunctionSet};
use crate::{DiffError, DiffResult};
use lazy_static::lazy_static;
use regex::Regex;
use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

/// One atomic token of the stripped input text. Terms are classified during
/// tokenizing, so the recursive-descent grammar never inspects raw characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Paren(Paren),
    Op(BinOp),
    /// A recognized function name such as `sin`.
    Func(&'a str),
    /// A number, a single letter, or whatever else accumulated between operators.
    Val(&'a str),
}

impl<'a> Token<'a> {
    pub fn repr(&self) -> &'a str {
        match self {
            Token::Paren(Paren::Open) => "(",
            Token::Paren(Paren::Close) => ")",
            Token::Op(op) => op.repr(),
            Token::Func(name) => name,
            Token::Val(term) => term,
        }
    }
}

pub type TokenVec<'a> = SmallVec<[Token<'a>; N_TOKENS_ON_STACK]>;

/// Checks that the parentheses of the raw text are balanced before any tokenizing
/// is attempted.
///
/// # Errors
///
/// [`DiffError::MismatchedBrackets`](DiffError::MismatchedBrackets) if the counter of
/// open parentheses ever drops below zero or does not end at zero.
///
pub fn check_brackets(text: &str) -> DiffResult<()> {
    let mut open_cnt = 0i32;
    for c in text.chars() {
        match c {
            '(' => open_cnt += 1,
            ')' => open_cnt -= 1,
            _ => (),
        }
        if open_cnt < 0 {
            return Err(DiffError::MismatchedBrackets);
        }
    }
    if open_cnt != 0 {
        Err(DiffError::MismatchedBrackets)
    } else {
        Ok(())
    }
}

fn flush_term<'a>(term: &'a str, funcs: &FunctionSet) -> DiffResult<Option<Token<'a>>> {
    lazy_static! {
        static ref RE_NAME: Regex = Regex::new(r"^[a-zA-Z]+$").unwrap();
    }
    if term.is_empty() {
        return Ok(None);
    }
    if RE_NAME.is_match(term) {
        if funcs.contains(term) {
            return Ok(Some(Token::Func(term)));
        }
        if term.len() > 1 {
            return Err(DiffError::UnknownMultiCharToken(term.to_string()));
        }
    }
    Ok(Some(Token::Val(term)))
}

/// Scans the whitespace-stripped text into a flat token sequence.
///
/// # Arguments
///
/// * `text` - text to be tokenized, must not contain whitespace anymore
/// * `funcs` - recognized function names
///
/// # Errors
///
/// [`DiffError::UnknownMultiCharToken`](DiffError::UnknownMultiCharToken) for any
/// multi-letter run that is not a function name, [`DiffError::BadFormat`](DiffError::BadFormat)
/// for non-ascii input.
///
pub fn tokenize<'a>(text: &'a str, funcs: &FunctionSet) -> DiffResult<TokenVec<'a>> {
    // byte-wise scanning below relies on ascii
    if text.chars().any(|c| !c.is_ascii()) {
        return Err(DiffError::BadFormat(
            "only ascii characters are supported".to_string(),
        ));
    }
    let bytes = text.as_bytes();
    let mut tokens = TokenVec::new();
    let mut term_start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        let structural = match bytes[i] {
            b'(' => Some((Token::Paren(Paren::Open), 1)),
            b')' => Some((Token::Paren(Paren::Close), 1)),
            b'^' => Some((Token::Op(BinOp::Pow), 1)),
            // fold ** into a single indexing token
            b'*' if bytes.get(i + 1) == Some(&b'*') => Some((Token::Op(BinOp::Pow), 2)),
            b'*' => Some((Token::Op(BinOp::Mul), 1)),
            b'/' => Some((Token::Op(BinOp::Div), 1)),
            b'+' => Some((Token::Op(BinOp::Add), 1)),
            b'-' => Some((Token::Op(BinOp::Sub), 1)),
            _ => None,
        };
        match structural {
            Some((token, width)) => {
                if let Some(term) = flush_term(&text[term_start..i], funcs)? {
                    tokens.push(term);
                }
                tokens.push(token);
                i += width;
                term_start = i;
            }
            None => i += 1,
        }
    }
    if let Some(term) = flush_term(&text[term_start..], funcs)? {
        tokens.push(term);
    }
    Ok(tokens)
}

/// Top-level post-check applied after tokenizing, outside of the grammar itself: as
/// soon as the sequence contains any binary operator, the whole sequence has to start
/// with `(` and end with `)`.
///
/// # Errors
///
/// [`DiffError::BracketWrappingRequired`](DiffError::BracketWrappingRequired)
///
pub fn check_bracket_wrapping(tokens: &[Token]) -> DiffResult<()> {
    if !tokens.iter().any(|t| matches!(t, Token::Op(_))) {
        return Ok(());
    }
    match (tokens.first(), tokens.last()) {
        (Some(Token::Paren(Paren::Open)), Some(Token::Paren(Paren::Close))) => Ok(()),
        _ => Err(DiffError::BracketWrappingRequired),
    }
}

#[test]
fn test_check_brackets() {
    assert!(check_brackets("(sin(x))").is_ok());
    assert!(check_brackets("").is_ok());
    assert!(check_brackets("(sin(x)").is_err());
    assert!(check_brackets("(a+3").is_err());
    assert!(check_brackets(")(").is_err());
    assert!(check_brackets("x)").is_err());
}

#[test]
fn test_tokenize() {
    let funcs = FunctionSet::default();
    let tokens = tokenize("(sin(x)+2)", &funcs).unwrap();
    assert_eq!(
        &tokens[..],
        &[
            Token::Paren(Paren::Open),
            Token::Func("sin"),
            Token::Paren(Paren::Open),
            Token::Val("x"),
            Token::Paren(Paren::Close),
            Token::Op(BinOp::Add),
            Token::Val("2"),
            Token::Paren(Paren::Close),
        ]
    );
    let tokens = tokenize("x**12", &funcs).unwrap();
    assert_eq!(
        &tokens[..],
        &[Token::Val("x"), Token::Op(BinOp::Pow), Token::Val("12")]
    );
    assert_eq!(tokenize("ӭ", &funcs), Err(DiffError::BadFormat(
        "only ascii characters are supported".to_string()
    )));
    assert_eq!(
        tokenize("sinx", &funcs),
        Err(DiffError::UnknownMultiCharToken("sinx".to_string()))
    );
    assert_eq!(
        tokenize("(foo(x))", &funcs),
        Err(DiffError::UnknownMultiCharToken("foo".to_string()))
    );
    // trailing buffer is flushed with the same rule
    assert_eq!(
        tokenize("x+abc", &funcs),
        Err(DiffError::UnknownMultiCharToken("abc".to_string()))
    );
    assert_eq!(&tokenize("sin", &funcs).unwrap()[..], &[Token::Func("sin")]);
    // mixed terms survive tokenizing and are rejected by the grammar later
    assert_eq!(&tokenize("2x", &funcs).unwrap()[..], &[Token::Val("2x")]);
}

#[test]
fn test_bracket_wrapping() {
    let funcs = FunctionSet::default();
    let wrapped = tokenize("(x+2)", &funcs).unwrap();
    assert!(check_bracket_wrapping(&wrapped).is_ok());
    let bare = tokenize("x+2", &funcs).unwrap();
    assert_eq!(
        check_bracket_wrapping(&bare),
        Err(DiffError::BracketWrappingRequired)
    );
    let no_op = tokenize("sin(x)", &funcs).unwrap();
    assert!(check_bracket_wrapping(&no_op).is_ok());
    let single = tokenize("4", &funcs).unwrap();
    assert!(check_bracket_wrapping(&single).is_ok());
}
