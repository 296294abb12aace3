//! Galaxy Modem - the bit-level wire format.
//!
//! A value tree built from numbers, `nil` and cons pairs is mapped to a
//! string of `'0'`/`'1'` characters and back:
//!
//! | Value | Signal |
//! |---|---|
//! | `nil` | `00` |
//! | `(a . b)` | `11` ++ signal(a) ++ signal(b) |
//! | `0` | `010` |
//! | `n > 0` | `01` ++ unary nibble count ++ `0` ++ magnitude |
//! | `n < 0` | `10` ++ unary nibble count ++ `0` ++ magnitude |
//!
//! The magnitude is left-padded to a whole number of nibbles.
//!
//! `Data` also has a textual form (`( 1 , ( 2 , 3 ) )`) shared with the
//! interpreter's debug printer, used by command-line tools to read and print
//! signals.

mod data;
mod demodulate;
mod error;
mod modulate;
mod text;

pub use data::Data;
pub use demodulate::{demodulate, demodulate_at};
pub use error::{DataParseError, ModemError};
pub use modulate::{modulate, modulate_into};
