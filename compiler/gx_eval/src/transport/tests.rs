#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn no_transport_is_unavailable() {
    let err = NoTransport.round_trip("00").unwrap_err();
    assert!(matches!(err, TransportError::Unavailable));
}

#[test]
fn scripted_replays_in_order_and_records() {
    let handle = ScriptedTransport::new(["010", "00"]);
    let mut transport = handle.clone();

    assert_eq!(transport.round_trip("1101000").unwrap(), "010");
    assert_eq!(transport.round_trip("00").unwrap(), "00");
    assert_eq!(handle.requests(), vec!["1101000".to_string(), "00".to_string()]);
    assert_eq!(handle.remaining(), 0);
}

#[test]
fn scripted_fails_when_exhausted() {
    let mut transport = ScriptedTransport::new(Vec::<String>::new());
    let err = transport.round_trip("00").unwrap_err();
    assert_eq!(err.to_string(), "request failed: scripted replies exhausted");
    assert_eq!(transport.requests().len(), 1);
}
