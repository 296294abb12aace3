//! Signal to value tree.

use num_bigint::{BigInt, BigUint, Sign};

use crate::{Data, ModemError};

/// Decode a complete signal.
///
/// Surrounding whitespace is ignored (transport replies often end with a
/// newline); anything else left over after one value is an error.
pub fn demodulate(bits: &str) -> Result<Data, ModemError> {
    let bits = bits.trim();
    let (data, end) = demodulate_at(bits, 0)?;
    if end < bits.len() {
        return Err(ModemError::TrailingBits {
            at: end,
            remaining: bits.len() - end,
        });
    }
    Ok(data)
}

/// Decode one value starting at `cursor`.
///
/// Returns the value and the cursor just past it.
pub fn demodulate_at(bits: &str, cursor: usize) -> Result<(Data, usize), ModemError> {
    let mut reader = SignalReader { bits, pos: cursor };
    let data = reader.read_value()?;
    Ok((data, reader.pos))
}

struct SignalReader<'a> {
    bits: &'a str,
    pos: usize,
}

impl SignalReader<'_> {
    fn read_bit(&mut self) -> Result<bool, ModemError> {
        let at = self.pos;
        match self.bits.as_bytes().get(at) {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            Some(_) => Err(ModemError::InvalidBit {
                found: self.bits[at..].chars().next().unwrap_or('\u{fffd}'),
                at,
            }),
            None => Err(ModemError::UnexpectedEnd { at }),
        }
    }

    /// Read one value. List spines are consumed in a loop so only heads
    /// recurse.
    fn read_value(&mut self) -> Result<Data, ModemError> {
        let mut heads = Vec::new();
        let last = loop {
            match (self.read_bit()?, self.read_bit()?) {
                (false, false) => break Data::Nil,
                (true, true) => {
                    let head = gx_stack::ensure_sufficient_stack(|| self.read_value())?;
                    heads.push(head);
                }
                (false, true) => break Data::Number(self.read_number(Sign::Plus)?),
                (true, false) => break Data::Number(self.read_number(Sign::Minus)?),
            }
        };
        Ok(heads
            .into_iter()
            .rev()
            .fold(last, |tail, head| Data::cons(head, tail)))
    }

    /// Read the unary nibble count and the magnitude that follows it.
    fn read_number(&mut self, sign: Sign) -> Result<BigInt, ModemError> {
        let mut nibbles = 0usize;
        while self.read_bit()? {
            nibbles += 1;
        }

        let start = self.pos;
        for _ in 0..nibbles * 4 {
            self.read_bit()?;
        }

        let magnitude = if nibbles == 0 {
            BigUint::default()
        } else {
            BigUint::parse_bytes(&self.bits.as_bytes()[start..self.pos], 2).unwrap_or_default()
        };
        Ok(BigInt::from_biguint(sign, magnitude))
    }
}

#[cfg(test)]
mod tests;
