/// Tokens of expressions of up to this size are kept on the stack during parsing.
pub const N_TOKENS_ON_STACK: usize = 32;

/// Function sets of up to this size are kept on the stack.
pub const N_FUNCS_ON_STACK: usize = 8;
