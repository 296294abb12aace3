//! Recursive-descent parser building nodes directly into a `Graph`.

use gx_ir::{Graph, Name, NodeId, StringInterner, Value};
use num_bigint::BigInt;
use tracing::trace;

use crate::{ParseError, ParseErrorKind};

const EXPR_EXPECTED: &str = "`ap`, `(`, a number or a name";

/// One parsed line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Statement {
    /// `name = expr`: bind without evaluating.
    Binding(Binding),
    /// A bare expression to evaluate.
    Expr(NodeId),
}

/// A `name = expr` line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    pub name: Name,
    pub expr: NodeId,
}

/// Parse one line as either a binding or an expression.
pub fn parse_line(
    line: &str,
    graph: &mut Graph,
    interner: &mut StringInterner,
) -> Result<Statement, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.get(1) == Some(&"=") {
        let target = tokens[0];
        if !is_name(target) {
            return Err(ParseError::new(ParseErrorKind::InvalidBinding {
                found: target.to_string(),
            }));
        }
        let name = interner.intern(target);
        let expr = Parser::new(&tokens[2..], graph, interner).parse_complete()?;
        trace!(name = target, ?expr, "parsed binding");
        Ok(Statement::Binding(Binding { name, expr }))
    } else {
        let expr = Parser::new(&tokens, graph, interner).parse_complete()?;
        trace!(?expr, "parsed expression");
        Ok(Statement::Expr(expr))
    }
}

/// Parse one line that must be a bare expression.
pub fn parse_expr(
    source: &str,
    graph: &mut Graph,
    interner: &mut StringInterner,
) -> Result<NodeId, ParseError> {
    let tokens: Vec<&str> = source.split_whitespace().collect();
    Parser::new(&tokens, graph, interner).parse_complete()
}

/// Parse a script: every non-blank line must be a binding.
///
/// Errors carry the 1-based line number.
pub fn parse_script(
    source: &str,
    graph: &mut Graph,
    interner: &mut StringInterner,
) -> Result<Vec<Binding>, ParseError> {
    let mut bindings = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, graph, interner).map_err(|e| e.at_line(line_no))? {
            Statement::Binding(binding) => bindings.push(binding),
            Statement::Expr(_) => {
                let found = line.split_whitespace().next().unwrap_or_default();
                return Err(ParseError::new(ParseErrorKind::InvalidBinding {
                    found: found.to_string(),
                })
                .at_line(line_no));
            }
        }
    }
    trace!(count = bindings.len(), "parsed script");
    Ok(bindings)
}

/// A bare token that names something rather than being syntax or a number.
fn is_name(token: &str) -> bool {
    !matches!(token, "ap" | "(" | ")" | "," | "=") && parse_integer(token).is_none()
}

/// `-?[0-9]+`
fn parse_integer(token: &str) -> Option<BigInt> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

struct Parser<'t, 'g> {
    tokens: &'t [&'t str],
    pos: usize,
    graph: &'g mut Graph,
    interner: &'g mut StringInterner,
}

impl<'t, 'g> Parser<'t, 'g> {
    fn new(
        tokens: &'t [&'t str],
        graph: &'g mut Graph,
        interner: &'g mut StringInterner,
    ) -> Self {
        Parser {
            tokens,
            pos: 0,
            graph,
            interner,
        }
    }

    fn peek(&self) -> Option<&'t str> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self, expected: &'static str) -> Result<&'t str, ParseError> {
        let token = self
            .peek()
            .ok_or_else(|| ParseError::unexpected_end(expected))?;
        self.pos += 1;
        Ok(token)
    }

    /// One expression spanning every remaining token.
    fn parse_complete(&mut self) -> Result<NodeId, ParseError> {
        let expr = self.parse_expr()?;
        match self.peek() {
            None => Ok(expr),
            Some(found) => Err(ParseError::new(ParseErrorKind::TrailingTokens {
                found: found.to_string(),
            })),
        }
    }

    fn parse_expr(&mut self) -> Result<NodeId, ParseError> {
        gx_stack::ensure_sufficient_stack(|| {
            let token = self.bump(EXPR_EXPECTED)?;
            match token {
                "ap" => {
                    let func = self.parse_expr()?;
                    let arg = self.parse_expr()?;
                    Ok(self.graph.apply(func, arg))
                }
                "(" => self.parse_list(),
                ")" | "," | "=" => Err(ParseError::unexpected_token(token, EXPR_EXPECTED)),
                _ => match parse_integer(token) {
                    Some(n) => Ok(self.graph.literal(Value::Number(n))),
                    None => Ok(self.reference(token)),
                },
            }
        })
    }

    /// After `(`: the elements of a list literal, desugared to `cons`/`nil`.
    fn parse_list(&mut self) -> Result<NodeId, ParseError> {
        let mut items = Vec::new();
        if self.peek() == Some(")") {
            self.pos += 1;
        } else {
            loop {
                items.push(self.parse_expr()?);
                match self.bump("`,` or `)`")? {
                    "," => {}
                    ")" => break,
                    found => return Err(ParseError::unexpected_token(found, "`,` or `)`")),
                }
            }
        }

        let mut list = self.reference("nil");
        for item in items.into_iter().rev() {
            let cons = self.reference("cons");
            let partial = self.graph.apply(cons, item);
            list = self.graph.apply(partial, list);
        }
        Ok(list)
    }

    fn reference(&mut self, token: &str) -> NodeId {
        let name = self.interner.intern(token);
        self.graph.reference(name)
    }
}

#[cfg(test)]
mod tests;
