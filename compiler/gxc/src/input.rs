//! Line-oriented input shared between the driver and the console transport.
//!
//! The REPL, the click loop and the console transport all read from stdin.
//! They share one buffered reader so a reply typed for `send` is never
//! swallowed by a read-ahead in another reader.

use std::cell::RefCell;
use std::io::{self, BufRead, BufReader};
use std::rc::Rc;

/// A cloneable handle to one line source.
#[derive(Clone)]
pub struct LineInput {
    reader: Rc<RefCell<Box<dyn BufRead>>>,
}

impl LineInput {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        LineInput {
            reader: Rc::new(RefCell::new(Box::new(reader))),
        }
    }

    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }

    /// Next line without its line terminator, or `None` at end of input.
    pub fn next_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
