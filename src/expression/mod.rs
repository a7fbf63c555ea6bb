use crate::operators::{BinOp, FunctionSet};
use crate::{parser, DiffResult};
use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
    str::FromStr,
};

pub mod parse;
#[cfg(feature = "serde")]
mod serde;

/// A parsed expression. The tree is immutable once constructed; differentiation
/// builds new trees and reuses undifferentiated subtrees via their [`Rc`](Rc)
/// handles, which is safe precisely because nodes are never mutated in place.
/// Equality is structural, two trees compare equal iff their tags and children do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// The variable `x`, a single non-`x` letter treated as an opaque constant,
    /// or a digit-string literal.
    Leaf(String),
    /// A binary operation. There is no unary minus, negation only ever appears
    /// textually inside a leaf such as `-1`.
    Bin {
        op: BinOp,
        left: Rc<Expr>,
        right: Rc<Expr>,
    },
    /// A unary function application such as `sin(x)`.
    Func { name: String, arg: Rc<Expr> },
}

impl Expr {
    pub fn leaf(text: impl Into<String>) -> Rc<Expr> {
        Rc::new(Expr::Leaf(text.into()))
    }

    pub fn bin(op: BinOp, left: Rc<Expr>, right: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Bin { op, left, right })
    }

    pub fn func(name: impl Into<String>, arg: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Func {
            name: name.into(),
            arg,
        })
    }

    /// Parses a string into an expression tree using the grammar alone, i.e.,
    /// without the bracket-wrapping post-check of the differentiation pipeline.
    ///
    /// # Errors
    ///
    /// Any of the validator, tokenizer, or grammar failures, see
    /// [`DiffError`](crate::DiffError).
    ///
    pub fn parse(text: &str, funcs: &FunctionSet) -> DiffResult<Rc<Expr>> {
        parser::check_brackets(text)?;
        let stripped = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        let tokens = parser::tokenize(&stripped, funcs)?;
        parse::parse_tokens(&tokens)
    }

    /// Creates an expression string that corresponds to this tree, inserting
    /// parentheses only where the precedence numbers of [`BinOp::prio`](BinOp::prio)
    /// require them.
    pub fn unparse(&self) -> String {
        self.unparse_prio(0)
    }

    fn unparse_prio(&self, parent_prio: i32) -> String {
        match self {
            Expr::Leaf(text) => text.clone(),
            // the call syntax supplies the parentheses, so the argument restarts at 0
            Expr::Func { name, arg } => format!("{}({})", name, arg.unparse_prio(0)),
            Expr::Bin { op, left, right } => {
                let prio = op.prio();
                // the right side gets an adjusted priority: one lower for the
                // right-associative indexing operators, one higher for the
                // non-associative ones. This keeps a-(b-c) from unparsing as a-b-c.
                let right_prio = match op {
                    BinOp::Pow => prio - 1,
                    BinOp::Div | BinOp::Sub => prio + 1,
                    BinOp::Add | BinOp::Mul => prio,
                };
                let unparsed = format!(
                    "{}{}{}",
                    left.unparse_prio(prio),
                    op.repr(),
                    right.unparse_prio(right_prio)
                );
                if prio < parent_prio {
                    format!("({})", unparsed)
                } else {
                    unparsed
                }
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.unparse())
    }
}

impl FromStr for Expr {
    type Err = crate::DiffError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let root = Expr::parse(text, &FunctionSet::default())?;
        Ok(Rc::try_unwrap(root).unwrap_or_else(|rc| (*rc).clone()))
    }
}
