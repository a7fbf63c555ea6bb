use crate::expression::Expr;
use crate::operators::BinOp;
use crate::{DiffError, DiffResult};
use std::rc::Rc;

/// The distinguished variable everything is differentiated with respect to. Every
/// other letter and every numeral is a constant.
const VAR: &str = "x";

/// Walks the tree and builds a new tree representing the derivative with respect to
/// [`VAR`](VAR), one rewrite rule per node kind. Undifferentiated subtrees are reused
/// via [`Rc::clone`](Rc::clone) instead of being copied; no node is ever mutated. No
/// simplification is applied beyond what the rules incidentally produce, so the
/// output contains factors like `*1` and summands like `+0`.
///
/// # Errors
///
/// [`DiffError::UnimplementedFunction`](DiffError::UnimplementedFunction) for a
/// function node whose name has no rule below.
///
pub fn differentiate(node: &Rc<Expr>) -> DiffResult<Rc<Expr>> {
    match node.as_ref() {
        Expr::Leaf(text) => Ok(Expr::leaf(if text == VAR { "1" } else { "0" })),
        Expr::Bin { op, left, right } => match op {
            // sum and difference rules keep the operator
            BinOp::Add | BinOp::Sub => Ok(Expr::bin(
                *op,
                differentiate(left)?,
                differentiate(right)?,
            )),
            // product rule, left*d(right) + d(left)*right
            BinOp::Mul => Ok(Expr::bin(
                BinOp::Add,
                Expr::bin(BinOp::Mul, Rc::clone(left), differentiate(right)?),
                Expr::bin(BinOp::Mul, differentiate(left)?, Rc::clone(right)),
            )),
            // quotient rule, (right*d(left) - d(right)*left) / (right*right)
            BinOp::Div => Ok(Expr::bin(
                BinOp::Div,
                Expr::bin(
                    BinOp::Sub,
                    Expr::bin(BinOp::Mul, Rc::clone(right), differentiate(left)?),
                    Expr::bin(BinOp::Mul, differentiate(right)?, Rc::clone(left)),
                ),
                Expr::bin(BinOp::Mul, Rc::clone(right), Rc::clone(right)),
            )),
            // restricted power rule, right*left^(right-1)*d(left); the parser has
            // already pinned the exponent to a literal integer >= 1, and the new
            // exponent is kept as a right-1 subtree instead of being evaluated
            BinOp::Pow => {
                let lowered_exponent = Expr::bin(BinOp::Sub, Rc::clone(right), Expr::leaf("1"));
                Ok(Expr::bin(
                    BinOp::Mul,
                    Expr::bin(
                        BinOp::Mul,
                        Rc::clone(right),
                        Expr::bin(BinOp::Pow, Rc::clone(left), lowered_exponent),
                    ),
                    differentiate(left)?,
                ))
            }
        },
        Expr::Func { name, arg } => match name.as_str() {
            "sin" => Ok(Expr::bin(
                BinOp::Mul,
                Expr::func("cos", Rc::clone(arg)),
                differentiate(arg)?,
            )),
            // negation happens via the literal -1, there is no unary minus node
            "cos" => Ok(Expr::bin(
                BinOp::Mul,
                Expr::bin(
                    BinOp::Mul,
                    Expr::func("sin", Rc::clone(arg)),
                    differentiate(arg)?,
                ),
                Expr::leaf("-1"),
            )),
            "exp" => Ok(Expr::bin(
                BinOp::Mul,
                Expr::func("exp", Rc::clone(arg)),
                differentiate(arg)?,
            )),
            "log" => Ok(Expr::bin(
                BinOp::Div,
                differentiate(arg)?,
                Rc::clone(arg),
            )),
            _ => Err(DiffError::UnimplementedFunction(name.clone())),
        },
    }
}
