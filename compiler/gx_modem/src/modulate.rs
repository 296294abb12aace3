//! Value tree to signal.

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::Data;

/// Encode a value tree as a bit-string.
pub fn modulate(data: &Data) -> String {
    let mut out = String::new();
    modulate_into(&mut out, data);
    out
}

/// Append the signal for `data` to `out`.
///
/// Walks list spines iteratively; only list heads recurse.
pub fn modulate_into(out: &mut String, data: &Data) {
    let mut cur = data;
    loop {
        match cur {
            Data::Nil => {
                out.push_str("00");
                return;
            }
            Data::Number(n) => {
                modulate_number(out, n);
                return;
            }
            Data::Cons(head, tail) => {
                out.push_str("11");
                gx_stack::ensure_sufficient_stack(|| modulate_into(out, head));
                cur = tail;
            }
        }
    }
}

fn modulate_number(out: &mut String, n: &BigInt) {
    if n.is_zero() {
        out.push_str("010");
        return;
    }

    out.push_str(if n.sign() == Sign::Minus { "10" } else { "01" });

    let digits = n.magnitude().to_str_radix(2);
    let width = digits.len().div_ceil(4) * 4;
    for _ in 0..width / 4 {
        out.push('1');
    }
    out.push('0');
    for _ in digits.len()..width {
        out.push('0');
    }
    out.push_str(&digits);
}
