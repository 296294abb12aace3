//! Galaxy Parse - from script text to expression graph.
//!
//! The grammar is whitespace-delimited and line-oriented:
//!
//! ```text
//! line  := NAME '=' expr | expr
//! expr  := 'ap' expr expr
//!        | '(' ')'
//!        | '(' expr (',' expr)* ')'
//!        | INT                       -- -?[0-9]+
//!        | NAME
//! ```
//!
//! `( e1 , e2 )` is sugar for `ap ap cons e1 ap ap cons e2 nil`. Parsing
//! never evaluates anything: names become reference nodes resolved on first
//! force, which is what allows forward and self references in scripts.

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse_expr, parse_line, parse_script, Binding, Statement};
