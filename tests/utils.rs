use rand::{rngs::StdRng, Rng};
use std::rc::Rc;
use symdiff::{BinOp, Expr};

/// Generates a random tree of the shapes the grammar can produce: digit-string and
/// single-letter leaves, the four function applications, and binary nodes whose
/// exponents are literal integers >= 1. Indexing nodes never sit directly below
/// another indexing node on the left, the grammar cannot produce that either.
pub fn random_expr(rng: &mut StdRng, depth: usize) -> Rc<Expr> {
    fn random_leaf(rng: &mut StdRng) -> Rc<Expr> {
        if rng.gen_bool(0.5) {
            let letter = (b'a' + rng.gen_range(0..26u8)) as char;
            Expr::leaf(letter.to_string())
        } else {
            Expr::leaf(rng.gen_range(0..100u32).to_string())
        }
    }
    if depth == 0 {
        return random_leaf(rng);
    }
    match rng.gen_range(0..8) {
        0 | 1 => random_leaf(rng),
        2 => {
            let name = ["sin", "cos", "exp", "log"][rng.gen_range(0..4)];
            Expr::func(name, random_expr(rng, depth - 1))
        }
        3 => {
            let base = loop {
                let candidate = random_expr(rng, depth - 1);
                if !matches!(candidate.as_ref(), Expr::Bin { op: BinOp::Pow, .. }) {
                    break candidate;
                }
            };
            let exponent = Expr::leaf(rng.gen_range(1..13u32).to_string());
            Expr::bin(BinOp::Pow, base, exponent)
        }
        _ => {
            let op = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div][rng.gen_range(0..4)];
            Expr::bin(op, random_expr(rng, depth - 1), random_expr(rng, depth - 1))
        }
    }
}
