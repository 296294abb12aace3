//! `InterpreterBuilder` for creating Interpreter instances.

use gx_ir::{Graph, Instruction, StringInterner, Value};

use super::{EvalStats, Interpreter, Sentinels};
use crate::{Environment, NoTransport, Screen, Transport};

/// Builder for creating Interpreter instances with various configurations.
///
/// Every interpreter starts with the full instruction set bound in its
/// environment. The default transport rejects every `send`.
pub struct InterpreterBuilder {
    transport: Option<Box<dyn Transport>>,
    capacity: usize,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            capacity: 0,
        }
    }

    /// Set the transport used by `send` and `interact`.
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Pre-size the graph for a script of `source_len` bytes.
    #[must_use]
    pub fn source_len(mut self, source_len: usize) -> Self {
        self.capacity = source_len;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let mut graph = Graph::with_capacity(self.capacity);
        let mut interner = StringInterner::new();
        let mut env = Environment::new();

        for op in Instruction::ALL {
            let node = graph.literal(Value::from_instruction(op));
            env.define(interner.intern(op.name()), node);
        }
        let sentinels = Sentinels {
            t: graph.literal(Value::True),
            f: graph.literal(Value::False),
        };

        Interpreter {
            graph,
            interner,
            env,
            screen: Screen::new(),
            transport: self.transport.unwrap_or_else(|| Box::new(NoTransport)),
            stats: EvalStats::default(),
            sentinels,
        }
    }
}
