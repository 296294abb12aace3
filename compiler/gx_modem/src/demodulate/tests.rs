use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_numbers() {
    assert_eq!(demodulate("010"), Ok(Data::int(0)));
    assert_eq!(demodulate("01100001"), Ok(Data::int(1)));
    assert_eq!(demodulate("10100001"), Ok(Data::int(-1)));
    assert_eq!(demodulate("0111000010000"), Ok(Data::int(16)));
    assert_eq!(demodulate("1011000010000"), Ok(Data::int(-16)));
}

#[test]
fn test_negative_zero_is_zero() {
    assert_eq!(demodulate("100"), Ok(Data::int(0)));
}

#[test]
fn test_lists() {
    assert_eq!(demodulate("00"), Ok(Data::Nil));
    assert_eq!(
        demodulate("1101100001110110001000"),
        Ok(Data::list([Data::int(1), Data::int(2)]))
    );
    assert_eq!(
        demodulate("110110000101100010"),
        Ok(Data::cons(Data::int(1), Data::int(2)))
    );
}

#[test]
fn test_reply_newline_is_ignored() {
    assert_eq!(demodulate("1101000\n"), Ok(Data::list([Data::int(0)])));
}

#[test]
fn test_demodulate_at_reports_cursor() {
    // Two values back to back: 1 then nil.
    let bits = "0110000100";
    assert_eq!(demodulate_at(bits, 0), Ok((Data::int(1), 8)));
    assert_eq!(demodulate_at(bits, 8), Ok((Data::Nil, 10)));
}

#[test]
fn test_truncated_signal() {
    assert_eq!(demodulate("0"), Err(ModemError::UnexpectedEnd { at: 1 }));
    assert_eq!(demodulate("0110000"), Err(ModemError::UnexpectedEnd { at: 7 }));
    assert_eq!(demodulate("11010"), Err(ModemError::UnexpectedEnd { at: 5 }));
}

#[test]
fn test_invalid_character() {
    assert_eq!(
        demodulate("01x"),
        Err(ModemError::InvalidBit { found: 'x', at: 2 })
    );
}

#[test]
fn test_trailing_bits() {
    assert_eq!(
        demodulate("01000"),
        Err(ModemError::TrailingBits { at: 3, remaining: 2 })
    );
}

#[test]
fn test_long_reply_decodes_and_drops() {
    let bits = format!("{}00", "11010".repeat(300_000));
    let data = demodulate(&bits);
    let len = data.as_ref().ok().and_then(Data::as_list).map(|items| items.len());
    assert_eq!(len, Some(300_000));
    drop(data);
}
