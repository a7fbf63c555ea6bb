mod utils;
use rand::{rngs::StdRng, SeedableRng};
use std::str::FromStr;
use symdiff::{DiffError, Expr, FunctionSet};
use utils::random_expr;

#[test]
fn test_display() -> Result<(), DiffError> {
    let expr = Expr::from_str("(sin(x)+2)*x")?;
    assert_eq!(format!("{}", expr), "(sin(x)+2)*x");
    Ok(())
}

#[test]
fn test_structural_round_trip() -> Result<(), DiffError> {
    // accepted inputs re-parse from their printed form into structurally equal trees
    for text in [
        "4",
        "x",
        "(sin(x)+2)",
        "(cos(x)/(x^2))",
        "((x+1)*x)",
        "(x**12)",
        "(cos((exp(x))/(x^12))+(x^2))",
        "(a*(b+c)-d/e)",
        "(log(log(log(x))))",
    ] {
        let funcs = FunctionSet::default();
        let tree = Expr::parse(text, &funcs)?;
        let reparsed = Expr::parse(&tree.unparse(), &funcs)?;
        assert_eq!(tree, reparsed, "round trip of '{}' changed the tree", text);
    }
    Ok(())
}

#[test]
fn test_print_parse_print_fixpoint() {
    // printed output of arbitrary trees is re-parseable and printing is a fixpoint
    let mut rng = StdRng::seed_from_u64(0);
    let funcs = FunctionSet::default();
    for _ in 0..200 {
        let tree = random_expr(&mut rng, 4);
        let printed = tree.unparse();
        let reparsed = Expr::parse(&printed, &funcs)
            .unwrap_or_else(|e| panic!("'{}' did not re-parse, {}", printed, e));
        assert_eq!(reparsed.unparse(), printed);
    }
}

#[test]
fn test_custom_function_set_parses() -> Result<(), DiffError> {
    let funcs = FunctionSet::new(&["sin", "sinh"]);
    let tree = Expr::parse("sinh(x)", &funcs)?;
    assert_eq!(tree.unparse(), "sinh(x)");
    // and the name is unknown without the custom set
    assert_eq!(
        Expr::parse("sinh(x)", &FunctionSet::default()),
        Err(DiffError::UnknownMultiCharToken("sinh".to_string()))
    );
    Ok(())
}

#[test]
fn test_grammar_rejections() {
    for text in ["(a+)", "a b c", "((x)", "x)", "3..4", "x+", "*x", "(2x+1)"] {
        assert!(
            Expr::from_str(text).is_err(),
            "expected '{}' to be rejected",
            text
        );
    }
}
