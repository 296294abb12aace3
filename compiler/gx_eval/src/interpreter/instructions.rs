//! Semantics of the built-in instructions.
//!
//! `execute` runs once an instruction has all of its arguments. Arguments
//! arrive as unevaluated nodes; each arm forces exactly what it needs.

use gx_ir::{BigInt, Instruction, NodeId, Value};
use gx_modem::modulate;
use num_traits::{One, ToPrimitive, Zero};
use tracing::debug;

use super::Interpreter;
use crate::errors::{self, EvalResult};

/// Largest exponent `pwr2` accepts.
const MAX_PWR2_EXPONENT: usize = 1 << 16;

impl Interpreter {
    pub(super) fn execute(&mut self, op: Instruction, args: &[NodeId]) -> EvalResult {
        match op {
            Instruction::Inc => Ok(Value::Number(self.number(args[0])? + 1)),
            Instruction::Dec => Ok(Value::Number(self.number(args[0])? - 1)),
            Instruction::Neg => Ok(Value::Number(-self.number(args[0])?)),
            Instruction::Add => {
                let (a, b) = self.numbers(args[0], args[1])?;
                Ok(Value::Number(a + b))
            }
            Instruction::Mul => {
                let (a, b) = self.numbers(args[0], args[1])?;
                Ok(Value::Number(a * b))
            }
            Instruction::Div => {
                let (a, b) = self.numbers(args[0], args[1])?;
                if b.is_zero() {
                    return Err(errors::division_by_zero());
                }
                // BigInt division truncates toward zero.
                Ok(Value::Number(a / b))
            }
            Instruction::Pwr2 => {
                let exponent = self.number(args[0])?;
                match exponent.to_usize() {
                    Some(e) if e <= MAX_PWR2_EXPONENT => Ok(Value::Number(BigInt::one() << e)),
                    _ => Err(errors::exponent_out_of_range(&exponent)),
                }
            }
            Instruction::Eq => {
                let (a, b) = self.numbers(args[0], args[1])?;
                Ok(Value::bool(a == b))
            }
            Instruction::Lt => {
                let (a, b) = self.numbers(args[0], args[1])?;
                Ok(Value::bool(a < b))
            }
            Instruction::If0 => Ok(Value::bool(self.number(args[0])?.is_zero())),

            Instruction::True | Instruction::I => self.force(args[0]),
            Instruction::False => self.force(args[1]),
            Instruction::S => {
                // x0 x2 (x1 x2): the shared x2 node is forced at most once.
                let (x0, x1, x2) = (args[0], args[1], args[2]);
                let right = self.graph.apply(x1, x2);
                let func = self.force(x0)?;
                let func = self.apply(func, x2)?;
                self.apply(func, right)
            }
            Instruction::C => {
                let (x0, x1, x2) = (args[0], args[1], args[2]);
                let func = self.force(x0)?;
                let func = self.apply(func, x2)?;
                self.apply(func, x1)
            }
            Instruction::B => {
                let (x0, x1, x2) = (args[0], args[1], args[2]);
                let inner = self.graph.apply(x1, x2);
                let func = self.force(x0)?;
                self.apply(func, inner)
            }

            Instruction::Cons | Instruction::Vec => {
                let (head, tail, selector) = (args[0], args[1], args[2]);
                let func = self.force(selector)?;
                let func = self.apply(func, head)?;
                self.apply(func, tail)
            }
            Instruction::Car => self.select(args[0], true),
            Instruction::Cdr => self.select(args[0], false),
            Instruction::Nil => Ok(Value::Nil),
            Instruction::IsNil => Ok(Value::bool(self.force(args[0])?.is_nil())),

            Instruction::Mod => {
                let value = self.force(args[0])?;
                let data = self.reify(value)?;
                Ok(Value::Modulated(modulate(&data).into()))
            }
            Instruction::Dem => match self.force(args[0])? {
                Value::Modulated(bits) => {
                    let data = gx_modem::demodulate(&bits).map_err(|e| errors::modem(&e))?;
                    Ok(self.value_from_data(&data))
                }
                other => Err(errors::type_mismatch("modulated", &other)),
            },
            Instruction::Send => {
                let value = self.force(args[0])?;
                self.send(value)
            }

            Instruction::Draw => {
                let value = self.force(args[0])?;
                let picture = self.picture_from(value)?;
                Ok(Value::Picture(self.push_picture(picture)))
            }
            Instruction::MultipleDraw => {
                let value = self.force(args[0])?;
                let pictures = self.draw_all(value)?;
                Ok(self.picture_list(pictures))
            }
            Instruction::Interact => {
                let outcome = self.interact(args[0], args[1], args[2])?;
                let pictures = self.picture_list(outcome.pictures);
                let pictures = self.graph.literal(pictures);
                Ok(self.list_value(vec![outcome.state, pictures]))
            }
        }
    }

    /// Force a node that must hold a number.
    fn number(&mut self, node: NodeId) -> Result<BigInt, errors::EvalError> {
        match self.force(node)? {
            Value::Number(n) => Ok(n),
            other => Err(errors::type_mismatch("number", &other)),
        }
    }

    fn numbers(&mut self, a: NodeId, b: NodeId) -> Result<(BigInt, BigInt), errors::EvalError> {
        Ok((self.number(a)?, self.number(b)?))
    }

    /// `car` (`head == true`) or `cdr` of a pair-like value.
    ///
    /// Pair-like values go through `pair_nodes`; anything else is applied
    /// to `t` or `f`, which is what the pair encoding means.
    fn select(&mut self, node: NodeId, head: bool) -> EvalResult {
        let value = self.force(node)?;
        if let Some((car, cdr)) = self.pair_nodes(&value) {
            return self.force(if head { car } else { cdr });
        }
        let selector = if head { self.sentinels.t } else { self.sentinels.f };
        self.apply(value, selector)
    }

    /// Modulate `value`, run one round trip, decode the reply.
    pub(super) fn send(&mut self, value: Value) -> EvalResult {
        let request = modulate(&self.reify(value)?);
        debug!(bits = request.len(), "send");
        let reply = self
            .transport
            .round_trip(&request)
            .map_err(|e| errors::transport(&e))?;
        let data = gx_modem::demodulate(&reply).map_err(|e| errors::modem(&e))?;
        debug!(reply = %data, "received");
        Ok(self.value_from_data(&data))
    }
}
