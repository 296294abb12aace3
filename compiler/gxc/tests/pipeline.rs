//! End-to-end tests: script file, interpreter, commands.
//!
//! `fixtures/protocols.txt` defines two protocols out of combinators:
//! - `clickdraw`: keeps its state and draws the clicked point
//! - `pinger`: while the state is `nil`, sends the vector and moves to
//!   state `0`; afterwards behaves like `clickdraw`

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Cursor;

use gx_eval::{NoTransport, ScriptedTransport};
use gx_modem::{modulate, Data};
use gxc::commands::{
    demodulate_text, eval_expr, interact_loop, load_interpreter, modulate_text, parse_click,
    repl, send_text, CommandError,
};
use gxc::LineInput;
use pretty_assertions::assert_eq;

fn fixture() -> String {
    format!("{}/tests/fixtures/protocols.txt", env!("CARGO_MANIFEST_DIR"))
}

fn input(text: &'static str) -> LineInput {
    LineInput::new(Cursor::new(text))
}

#[test]
fn clickdraw_follows_clicks() {
    let mut interp = load_interpreter(&fixture(), Box::new(NoTransport)).unwrap();
    let mut out = Vec::new();

    let rounds = interact_loop(&mut interp, "clickdraw", &input("1 2\nnonsense\n"), &mut out).unwrap();

    assert_eq!(rounds, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "state: nil\norigin (0, 0)\n#\nclick> \
         state: nil\norigin (1, 2)\n#\nclick> \
         expected `x y`, got `nonsense`\nclick> \n"
    );
}

#[test]
fn pinger_round_trips_once() {
    let transport = ScriptedTransport::new([modulate(&Data::vector(3, 4))]);
    let mut interp = load_interpreter(&fixture(), Box::new(transport.clone())).unwrap();
    let mut out = Vec::new();

    let rounds = interact_loop(&mut interp, "pinger", &input(""), &mut out).unwrap();

    assert_eq!(rounds, 1);
    assert_eq!(transport.requests(), vec![modulate(&Data::vector(0, 0))]);
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("state: 0\norigin (3, 4)\n#\n"), "{out}");
}

#[test]
fn pinger_without_transport_fails() {
    let mut interp = load_interpreter(&fixture(), Box::new(NoTransport)).unwrap();
    let err = interact_loop(&mut interp, "pinger", &input(""), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CommandError::Eval(_)));
    assert!(err.to_string().contains("no transport is configured"), "{err}");
}

#[test]
fn unknown_protocol_is_unbound() {
    let mut interp = load_interpreter(&fixture(), Box::new(NoTransport)).unwrap();
    let err = interact_loop(&mut interp, "galaxy", &input(""), &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "unbound name: galaxy");
}

#[test]
fn repl_binds_prints_and_recovers() {
    let mut interp = load_interpreter(&fixture(), Box::new(NoTransport)).unwrap();
    let mut out = Vec::new();
    let lines = "x = ap ap add 1 2\n\nx\nap draw ( ap ap vec 0 0 )\nap inc nil\nap w 5\n";

    repl(&mut interp, &input(lines), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "3\n\
         Picture\norigin (0, 0)\n#\n\
         error: type mismatch: expected number, got nil\n\
         ( 5 )\n"
    );
}

#[test]
fn eval_prints_value_and_pictures() {
    let mut interp = load_interpreter(&fixture(), Box::new(NoTransport)).unwrap();
    assert_eq!(
        eval_expr(&mut interp, "ap ap ap interact clickdraw nil ( 2 , 0 )").unwrap(),
        "( nil , ( Picture ) )\norigin (2, 0)\n#\n"
    );
    assert_eq!(eval_expr(&mut interp, "ap layers 7").unwrap(), "( ( ( 7 ) ) )\n");
}

#[test]
fn modem_commands() {
    assert_eq!(modulate_text("ap ap cons 1 nil").unwrap(), "110110000100");
    assert_eq!(modulate_text("( 1 , -1 )").unwrap(), "1101100001111010000100");
    assert_eq!(demodulate_text("110110000100").unwrap(), "( 1 )");
    assert!(matches!(
        demodulate_text("0111").unwrap_err(),
        CommandError::Modem(_)
    ));
    assert!(matches!(
        modulate_text("( 1 ,").unwrap_err(),
        CommandError::Data(_)
    ));
}

#[test]
fn send_command_decodes_reply() {
    let mut transport = ScriptedTransport::new(["1101000"]);
    assert_eq!(send_text(&mut transport, "( 0 )").unwrap(), "( 0 )");
    assert_eq!(transport.requests(), vec!["1101000".to_string()]);
}

#[test]
fn missing_script_is_reported() {
    let Err(err) = load_interpreter("/nonexistent/galaxy.txt", Box::new(NoTransport)) else {
        panic!("expected load_interpreter to fail");
    };
    assert!(matches!(err, CommandError::ReadScript { .. }));
    assert!(err.to_string().starts_with("cannot read `/nonexistent/galaxy.txt`"));
}

#[test]
fn click_parsing() {
    assert_eq!(parse_click("3 4"), Some((3, 4)));
    assert_eq!(parse_click(" -3, 4 "), Some((-3, 4)));
    assert_eq!(parse_click("3"), None);
    assert_eq!(parse_click("3 4 5"), None);
    assert_eq!(parse_click("x y"), None);
}
