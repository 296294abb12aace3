//! Reading the textual form of a value tree.
//!
//! Accepts what `Data`'s `Display` prints plus the `vec` spelling:
//! integers, `nil`, `( a , b , ... )`, `( )` and `ap ap cons a b`.
//! Punctuation does not need surrounding spaces.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::{Data, DataParseError};

impl FromStr for Data {
    type Err = DataParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s);
        let mut parser = TextParser {
            tokens: &tokens,
            pos: 0,
        };
        let data = parser.parse_data()?;
        match parser.peek() {
            None => Ok(data),
            Some(found) => Err(DataParseError::TrailingInput {
                found: found.to_string(),
            }),
        }
    }
}

fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in s.split_whitespace() {
        let mut start = 0;
        for (i, c) in word.char_indices() {
            if matches!(c, '(' | ')' | ',') {
                if start < i {
                    tokens.push(&word[start..i]);
                }
                tokens.push(&word[i..=i]);
                start = i + 1;
            }
        }
        if start < word.len() {
            tokens.push(&word[start..]);
        }
    }
    tokens
}

struct TextParser<'a> {
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> TextParser<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str, DataParseError> {
        let token = self
            .peek()
            .ok_or(DataParseError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, want: &'static str) -> Result<(), DataParseError> {
        let found = self.next(want)?;
        if found == want {
            Ok(())
        } else {
            Err(unexpected(found, want))
        }
    }

    fn parse_data(&mut self) -> Result<Data, DataParseError> {
        const EXPECTED: &str = "a number, `nil`, `(` or `ap`";
        let token = self.next(EXPECTED)?;
        match token {
            "nil" => Ok(Data::Nil),
            "(" => self.parse_list(),
            "ap" => {
                self.expect("ap")?;
                let cons = self.next("`cons` or `vec`")?;
                if cons != "cons" && cons != "vec" {
                    return Err(unexpected(cons, "`cons` or `vec`"));
                }
                let head = gx_stack::ensure_sufficient_stack(|| self.parse_data())?;
                let tail = gx_stack::ensure_sufficient_stack(|| self.parse_data())?;
                Ok(Data::cons(head, tail))
            }
            _ => parse_integer(token)
                .map(Data::Number)
                .ok_or_else(|| unexpected(token, EXPECTED)),
        }
    }

    /// After `(`: `)` or elements separated by `,`.
    fn parse_list(&mut self) -> Result<Data, DataParseError> {
        let mut items = Vec::new();
        if self.peek() == Some(")") {
            self.pos += 1;
            return Ok(Data::Nil);
        }
        loop {
            items.push(gx_stack::ensure_sufficient_stack(|| self.parse_data())?);
            match self.next("`,` or `)`")? {
                "," => {}
                ")" => return Ok(Data::list(items)),
                found => return Err(unexpected(found, "`,` or `)`")),
            }
        }
    }
}

fn unexpected(found: &str, expected: &'static str) -> DataParseError {
    DataParseError::UnexpectedToken {
        found: found.to_string(),
        expected,
    }
}

/// `-?[0-9]+`
fn parse_integer(token: &str) -> Option<BigInt> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
