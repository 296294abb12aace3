#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use gx_ir::NodeKind;
use pretty_assertions::assert_eq;

fn fresh() -> (Graph, StringInterner) {
    (Graph::new(), StringInterner::new())
}

/// Render a parsed node back to prefix form for easy comparison.
fn show(id: NodeId, graph: &Graph, interner: &StringInterner) -> String {
    match graph.kind(id) {
        NodeKind::Literal(Value::Number(n)) => n.to_string(),
        NodeKind::Literal(other) => other.type_name().to_string(),
        NodeKind::Reference(name) => interner.lookup(*name).to_string(),
        NodeKind::Apply { func, arg } => format!(
            "ap {} {}",
            show(*func, graph, interner),
            show(*arg, graph, interner)
        ),
    }
}

fn parse_to_text(source: &str) -> String {
    let (mut graph, mut interner) = fresh();
    let id = parse_expr(source, &mut graph, &mut interner).unwrap();
    show(id, &graph, &interner)
}

#[test]
fn parses_nested_applications() {
    assert_eq!(parse_to_text("ap ap add 1 2"), "ap ap add 1 2");
    assert_eq!(parse_to_text("ap inc ap inc 0"), "ap inc ap inc 0");
}

#[test]
fn parses_negative_and_large_integers() {
    assert_eq!(parse_to_text("-17"), "-17");
    assert_eq!(
        parse_to_text("123456789012345678901234567890"),
        "123456789012345678901234567890"
    );
}

#[test]
fn dash_alone_is_a_name() {
    let (mut graph, mut interner) = fresh();
    let id = parse_expr("-", &mut graph, &mut interner).unwrap();
    assert!(matches!(graph.kind(id), NodeKind::Reference(_)));
}

#[test]
fn list_sugar_desugars_to_cons() {
    assert_eq!(parse_to_text("( )"), "nil");
    assert_eq!(parse_to_text("( 1 )"), "ap ap cons 1 nil");
    assert_eq!(
        parse_to_text("( 1 , ap inc 2 )"),
        "ap ap cons 1 ap ap cons ap inc 2 nil"
    );
    assert_eq!(
        parse_to_text("( ( 1 ) , 2 )"),
        "ap ap cons ap ap cons 1 nil ap ap cons 2 nil"
    );
}

#[test]
fn binding_line() {
    let (mut graph, mut interner) = fresh();
    let stmt = parse_line(":1029 = ap ap cons 7 nil", &mut graph, &mut interner).unwrap();
    let Statement::Binding(binding) = stmt else {
        panic!("expected a binding, got {stmt:?}");
    };
    assert_eq!(interner.lookup(binding.name), ":1029");
    assert_eq!(show(binding.expr, &graph, &interner), "ap ap cons 7 nil");
}

#[test]
fn expression_line() {
    let (mut graph, mut interner) = fresh();
    let stmt = parse_line("ap neg 5", &mut graph, &mut interner).unwrap();
    assert!(matches!(stmt, Statement::Expr(_)));
}

#[test]
fn number_cannot_be_bound() {
    let (mut graph, mut interner) = fresh();
    let err = parse_line("5 = 6", &mut graph, &mut interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidBinding {
            found: "5".to_string()
        }
    );
}

#[test]
fn missing_argument_is_unexpected_end() {
    let (mut graph, mut interner) = fresh();
    let err = parse_expr("ap inc", &mut graph, &mut interner).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEnd { .. }));
}

#[test]
fn empty_expression_is_unexpected_end() {
    let (mut graph, mut interner) = fresh();
    let err = parse_line("x =", &mut graph, &mut interner).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEnd { .. }));
}

#[test]
fn trailing_tokens_are_rejected() {
    let (mut graph, mut interner) = fresh();
    let err = parse_expr("1 2", &mut graph, &mut interner).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::TrailingTokens {
            found: "2".to_string()
        }
    );
}

#[test]
fn stray_close_paren_is_unexpected() {
    let (mut graph, mut interner) = fresh();
    let err = parse_expr(")", &mut graph, &mut interner).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn unterminated_list_is_unexpected_end() {
    let (mut graph, mut interner) = fresh();
    let err = parse_expr("( 1 , 2", &mut graph, &mut interner).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEnd { .. }));
}

#[test]
fn script_collects_bindings_and_skips_blank_lines() {
    let (mut graph, mut interner) = fresh();
    let source = "a = 1\n\n   \nb = ap inc a\ngalaxy = b\n";
    let bindings = parse_script(source, &mut graph, &mut interner).unwrap();
    let names: Vec<&str> = bindings.iter().map(|b| interner.lookup(b.name)).collect();
    assert_eq!(names, vec!["a", "b", "galaxy"]);
}

#[test]
fn script_rejects_bare_expression_with_line_number() {
    let (mut graph, mut interner) = fresh();
    let err = parse_script("a = 1\nap inc a\n", &mut graph, &mut interner).unwrap_err();
    assert_eq!(err.line, Some(2));
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidBinding {
            found: "ap".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "line 2: expected `name = expression`, found `ap`"
    );
}

#[test]
fn script_parse_error_carries_line_number() {
    let (mut graph, mut interner) = fresh();
    let err = parse_script("a = 1\nb = ap inc\n", &mut graph, &mut interner).unwrap_err();
    assert_eq!(err.line, Some(2));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 50_000;
    let source = format!("{}0", "ap inc ".repeat(depth));
    let (mut graph, mut interner) = fresh();
    let id = parse_expr(&source, &mut graph, &mut interner).unwrap();
    assert!(matches!(graph.kind(id), NodeKind::Apply { .. }));
}
