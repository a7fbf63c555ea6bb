use crate::definitions::N_FUNCS_ON_STACK;
use smallvec::SmallVec;

/// The binary operators of the grammar. `**` from the input is folded into [`BinOp::Pow`]
/// by the tokenizer, so `^` and `**` share one variant and unparse as `^`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    /// Representation of the operator in strings to be parsed and in unparsed output.
    pub fn repr(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        }
    }

    /// Priority of the binary operation. An operation with a higher number binds
    /// tighter, e.g., `*` has a higher priority than `+`. The unparser inserts
    /// parentheses based on exactly these numbers.
    pub fn prio(self) -> i32 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Pow => 3,
        }
    }

    pub fn from_repr(repr: &str) -> Option<BinOp> {
        match repr {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            "^" | "**" => Some(BinOp::Pow),
            _ => None,
        }
    }
}

/// The set of function names the tokenizer recognizes. This is an explicit
/// configuration value passed into the pipeline's entry point rather than a
/// process-wide registry. Note that the tokenizer accepts every name in the set
/// while the differentiation engine only has rules for the default names, so a
/// custom name without a rule fails late with
/// [`UnimplementedFunction`](crate::DiffError::UnimplementedFunction).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct FunctionSet<'a> {
    names: SmallVec<[&'a str; N_FUNCS_ON_STACK]>,
}

impl<'a> FunctionSet<'a> {
    pub fn new(names: &[&'a str]) -> Self {
        Self {
            names: names.iter().copied().collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().copied()
    }
}

impl Default for FunctionSet<'static> {
    /// Returns the set of functions with differentiation rules.
    fn default() -> Self {
        Self::new(&["sin", "cos", "exp", "log"])
    }
}
