use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_alloc_returns_sequential_ids() {
    let mut graph = Graph::new();
    let a = graph.literal(Value::int(1));
    let b = graph.reference(Name::from_raw(7));
    let c = graph.apply(b, a);
    assert_eq!((a.raw(), b.raw(), c.raw()), (0, 1, 2));
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.kind(c), &NodeKind::Apply { func: b, arg: a });
}

#[test]
fn test_literal_is_cached_without_settling() {
    let mut graph = Graph::new();
    let a = graph.literal(Value::int(42));
    assert_eq!(graph.cached(a), Some(&Value::int(42)));
    assert_eq!(graph.memo(a), &Memo::Pending);
}

#[test]
fn test_memo_lifecycle() {
    let mut graph = Graph::new();
    let r = graph.reference(Name::from_raw(1));
    assert_eq!(graph.cached(r), None);

    graph.begin_forcing(r);
    assert!(graph.is_forcing(r));

    graph.settle(r, Value::Nil);
    assert!(!graph.is_forcing(r));
    assert_eq!(graph.cached(r), Some(&Value::Nil));
}

#[test]
fn test_abandon_returns_to_pending() {
    let mut graph = Graph::new();
    let r = graph.reference(Name::from_raw(1));
    graph.begin_forcing(r);
    graph.abandon(r);
    assert_eq!(graph.memo(r), &Memo::Pending);
}

#[test]
fn test_abandon_keeps_settled_value() {
    let mut graph = Graph::new();
    let r = graph.reference(Name::from_raw(1));
    graph.begin_forcing(r);
    graph.settle(r, Value::True);
    graph.abandon(r);
    assert_eq!(graph.cached(r), Some(&Value::True));
}
