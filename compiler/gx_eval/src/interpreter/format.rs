//! Debug stringifier.
//!
//! | Value | Text |
//! |---|---|
//! | `nil`, `t`, `f` | `nil`, `t`, `f` |
//! | number | decimal |
//! | modulated | `[0110...]` |
//! | picture | `Picture` |
//! | proper list | `( e1 , e2 , ... )` |
//! | other pair | `ap ap cons <car> <cdr>` |
//! | partial instruction | `ap ... ap <name> <arg> ...` |
//!
//! List elements are forced so data prints completely. An `s`, `c` or `b`
//! waiting for its last argument may encode a pair; it prints as the data
//! it encodes when it reifies, as a partial instruction otherwise.
//! Arguments captured by a partial instruction are printed without forcing
//! them: they show their memoized value when one exists, their source shape
//! otherwise.

use std::fmt::Write;

use gx_ir::{Instruction, NodeId, NodeKind, Partial, Value};
use gx_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::EvalError;

impl Interpreter {
    /// Render a value in the debug form.
    pub fn display(&mut self, value: Value) -> Result<String, EvalError> {
        let mut out = String::new();
        self.write_value(&mut out, value)?;
        Ok(out)
    }

    /// Force `node` and render the result.
    pub fn display_node(&mut self, node: NodeId) -> Result<String, EvalError> {
        let value = self.force(node)?;
        self.display(value)
    }

    fn write_value(&mut self, out: &mut String, value: Value) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| {
            match value {
                Value::Partial(partial) if value_is_pair(&partial) => {
                    return self.write_pair(out, partial.args[0], partial.args[1]);
                }
                Value::Partial(partial) if may_encode_pair(&partial) => {
                    self.write_encoded(out, &partial);
                }
                Value::Partial(partial) => self.write_partial(out, &partial),
                leaf => write_leaf(out, &leaf),
            }
            Ok(())
        })
    }

    /// Write a pair: as a list when the spine ends in `nil`.
    fn write_pair(&mut self, out: &mut String, head: NodeId, tail: NodeId) -> Result<(), EvalError> {
        let mut items = vec![head];
        let mut cur = self.force(tail)?;
        while let Some((head, tail)) = cur.as_pair() {
            items.push(head);
            cur = self.force(tail)?;
        }

        if cur.is_nil() {
            out.push('(');
            for (i, item) in items.into_iter().enumerate() {
                out.push_str(if i == 0 { " " } else { " , " });
                let item = self.force(item)?;
                self.write_value(out, item)?;
            }
            out.push_str(" )");
            return Ok(());
        }

        // Improper: nest `ap ap cons` around the final tail.
        for item in items {
            out.push_str("ap ap cons ");
            let item = self.force(item)?;
            self.write_value(out, item)?;
            out.push(' ');
        }
        self.write_value(out, cur)
    }

    /// A combinator that may encode a pair: the data if it reifies, the
    /// partial instruction if it does not.
    fn write_encoded(&mut self, out: &mut String, partial: &Partial) {
        match self.reify(Value::Partial(partial.clone())) {
            Ok(data) => {
                let _ = write!(out, "{data}");
            }
            Err(_) => self.write_partial(out, partial),
        }
    }

    fn write_partial(&self, out: &mut String, partial: &Partial) {
        for _ in &partial.args {
            out.push_str("ap ");
        }
        out.push_str(partial.op.name());
        for &arg in &partial.args {
            out.push(' ');
            self.write_unforced(out, arg);
        }
    }

    /// Render a node without forcing anything.
    fn write_unforced(&self, out: &mut String, node: NodeId) {
        ensure_sufficient_stack(|| {
            match self.graph.cached(node) {
                Some(Value::Partial(partial)) => return self.write_partial(out, partial),
                Some(leaf) => return write_leaf(out, leaf),
                None => {}
            }
            match *self.graph.kind(node) {
                NodeKind::Reference(name) => out.push_str(self.interner.lookup(name)),
                NodeKind::Apply { func, arg } => {
                    out.push_str("ap ");
                    self.write_unforced(out, func);
                    out.push(' ');
                    self.write_unforced(out, arg);
                }
                // Literals are always cached.
                NodeKind::Literal(_) => {}
            }
        });
    }
}

/// Write anything but a partial instruction.
fn write_leaf(out: &mut String, value: &Value) {
    match value {
        Value::Nil => out.push_str("nil"),
        Value::True => out.push('t'),
        Value::False => out.push('f'),
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Modulated(bits) => {
            let _ = write!(out, "[{bits}]");
        }
        Value::Picture(_) => out.push_str("Picture"),
        Value::Partial(partial) => out.push_str(partial.op.name()),
    }
}

fn may_encode_pair(partial: &Partial) -> bool {
    matches!(partial.op, Instruction::S | Instruction::C | Instruction::B)
        && partial.remaining() == 1
}

fn value_is_pair(partial: &Partial) -> bool {
    partial.op.is_pair_constructor() && partial.args.len() == 2
}
