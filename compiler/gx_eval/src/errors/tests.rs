use super::*;
use pretty_assertions::assert_eq;

#[test]
fn message_matches_kind_display() {
    let err = unbound_name(":1338");
    assert_eq!(err.message, err.kind.to_string());
    assert_eq!(err.to_string(), "unbound name: :1338");
}

#[test]
fn type_mismatch_names_the_value_type() {
    let err = type_mismatch("number", &Value::Nil);
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "number",
            got: "nil"
        }
    );
    assert_eq!(err.to_string(), "type mismatch: expected number, got nil");
}

#[test]
fn notes_are_printed_after_the_message() {
    let err = division_by_zero().with_note("in interaction round 2");
    assert_eq!(
        err.to_string(),
        "division by zero\n  note: in interaction round 2"
    );
}

#[test]
fn cyclic_reference_with_and_without_name() {
    assert_eq!(
        cyclic_reference(Some("x")).to_string(),
        "cyclic reference: `x` depends on itself"
    );
    assert_eq!(
        cyclic_reference(None).to_string(),
        "cyclic reference: expression depends on itself"
    );
}

#[test]
fn collaborator_errors_keep_their_message() {
    let err = modem(&ModemError::UnexpectedEnd { at: 4 });
    assert_eq!(err.to_string(), "malformed signal: signal ended unexpectedly at bit 4");

    let err = transport(&TransportError::Http { status: 403 });
    assert_eq!(
        err.to_string(),
        "transport failure: server answered with HTTP status 403"
    );
}
