//! The interpreter: lazy forcing over a memoized expression graph.
//!
//! # Forcing
//!
//! `force(node)` returns the node's memoized value if it has one. Otherwise
//! the node is marked in progress, its kind decides the work:
//!
//! - `Literal`: the held value
//! - `Reference`: look the name up, force the bound node
//! - `Apply`: force the function position, apply the result to the still
//!   unevaluated argument node
//!
//! and the result is written to the memo cell. Meeting a node that is
//! already in progress is a cyclic reference. A failed force resets the
//! cell so the node can be retried later.
//!
//! # Application
//!
//! Built-ins are curried: applying a `Partial` captures one more argument
//! node, and the instruction runs once all of its arguments are present
//! (see `instructions.rs`).

mod bridge;
mod builder;
mod format;
mod instructions;
mod interact;

use std::rc::Rc;

use gx_ir::{Graph, Instruction, Memo, NodeId, NodeKind, Partial, Picture, StringInterner, Value};
use gx_parse::Statement;
use gx_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::{self, EvalError, EvalResult};
use crate::{Environment, Screen, Transport};

pub use builder::InterpreterBuilder;
pub use interact::InteractOutcome;

/// Memo counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Nodes whose value was computed and memoized.
    pub computed: u64,
    /// Forces answered from a memo cell.
    pub reused: u64,
}

/// Private `t`/`f` nodes for taking pairs apart; immune to rebinding.
#[derive(Copy, Clone, Debug)]
struct Sentinels {
    t: NodeId,
    f: NodeId,
}

/// One evaluation session.
pub struct Interpreter {
    graph: Graph,
    interner: StringInterner,
    env: Environment,
    screen: Screen,
    transport: Box<dyn Transport>,
    stats: EvalStats,
    sentinels: Sentinels,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// An interpreter with the built-in environment and no transport.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn stats(&self) -> EvalStats {
        self.stats
    }

    /// Replace the transport used by `send`.
    pub fn set_transport(&mut self, transport: impl Transport + 'static) {
        self.transport = Box::new(transport);
    }

    /// Bind `name` to an existing node.
    pub fn define(&mut self, name: &str, node: NodeId) {
        let name = self.interner.intern(name);
        self.env.define(name, node);
    }

    /// The node `name` is bound to.
    pub fn resolve(&self, name: &str) -> Result<NodeId, EvalError> {
        self.interner
            .get(name)
            .and_then(|name| self.env.lookup(name))
            .ok_or_else(|| errors::unbound_name(name))
    }

    /// Parse one expression into the graph without forcing it.
    pub fn parse(&mut self, source: &str) -> Result<NodeId, EvalError> {
        gx_parse::parse_expr(source, &mut self.graph, &mut self.interner)
            .map_err(|e| errors::parse(&e))
    }

    /// Parse and force one expression.
    pub fn eval(&mut self, source: &str) -> EvalResult {
        let node = self.parse(source)?;
        self.force(node)
    }

    /// Run one REPL line: bindings are recorded, expressions forced.
    ///
    /// Returns `None` for a binding.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Value>, EvalError> {
        let statement = gx_parse::parse_line(line, &mut self.graph, &mut self.interner)
            .map_err(|e| errors::parse(&e))?;
        match statement {
            Statement::Binding(binding) => {
                self.env.define(binding.name, binding.expr);
                Ok(None)
            }
            Statement::Expr(node) => self.force(node).map(Some),
        }
    }

    /// Bind every `name = expr` line of a script.
    ///
    /// Nothing is forced; returns the number of bindings.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn load_script(&mut self, source: &str) -> Result<usize, EvalError> {
        let bindings = gx_parse::parse_script(source, &mut self.graph, &mut self.interner)
            .map_err(|e| errors::parse(&e))?;
        for binding in &bindings {
            self.env.define(binding.name, binding.expr);
        }
        tracing::debug!(bindings = bindings.len(), nodes = self.graph.len(), "script loaded");
        Ok(bindings.len())
    }

    /// Reduce `node` to its outermost value, memoizing the result.
    pub fn force(&mut self, node: NodeId) -> EvalResult {
        match self.graph.memo(node) {
            Memo::Ready(value) => {
                let value = value.clone();
                self.stats.reused += 1;
                return Ok(value);
            }
            Memo::Forcing => return Err(errors::cyclic_reference(self.name_of(node))),
            Memo::Pending => {}
        }
        if let NodeKind::Literal(value) = self.graph.kind(node) {
            return Ok(value.clone());
        }

        self.graph.begin_forcing(node);
        match ensure_sufficient_stack(|| self.compute(node)) {
            Ok(value) => {
                self.graph.settle(node, value.clone());
                self.stats.computed += 1;
                Ok(value)
            }
            Err(err) => {
                self.graph.abandon(node);
                Err(err)
            }
        }
    }

    fn compute(&mut self, node: NodeId) -> EvalResult {
        match *self.graph.kind(node) {
            NodeKind::Literal(ref value) => Ok(value.clone()),
            NodeKind::Reference(name) => {
                let target = self
                    .env
                    .lookup(name)
                    .ok_or_else(|| errors::unbound_name(self.interner.lookup(name)))?;
                trace!(name = self.interner.lookup(name), ?target, "resolve");
                self.force(target)
            }
            NodeKind::Apply { func, arg } => {
                let func = self.force(func)?;
                self.apply(func, arg)
            }
        }
    }

    /// Apply a forced function value to an unevaluated argument node.
    pub fn apply(&mut self, func: Value, arg: NodeId) -> EvalResult {
        ensure_sufficient_stack(|| match func {
            Value::Nil => Ok(Value::True),
            Value::True => Ok(Value::Partial(partial_of(Instruction::True, arg))),
            Value::False => Ok(Value::Partial(partial_of(Instruction::False, arg))),
            Value::Partial(mut partial) => {
                partial.args.push(arg);
                if partial.args.len() < partial.op.arity() {
                    Ok(Value::Partial(partial))
                } else {
                    self.execute(partial.op, &partial.args)
                }
            }
            other => Err(errors::not_callable(&other)),
        })
    }

    /// Name a node in error messages when it is a reference.
    fn name_of(&self, node: NodeId) -> Option<&str> {
        match self.graph.kind(node) {
            NodeKind::Reference(name) => Some(self.interner.lookup(*name)),
            _ => None,
        }
    }

    fn push_picture(&mut self, picture: Picture) -> Rc<Picture> {
        let picture = Rc::new(picture);
        self.screen.push(Rc::clone(&picture));
        picture
    }
}

fn partial_of(op: Instruction, arg: NodeId) -> Partial {
    let mut partial = Partial::bare(op);
    partial.args.push(arg);
    partial
}
