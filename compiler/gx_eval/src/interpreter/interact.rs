//! The interaction loop.
//!
//! One step forces `protocol state vector` to `( flag , newState , data )`.
//! A zero flag ends the loop: `data` is drawn as a list of pictures. Any
//! other flag sends `data` and runs the next step with the reply as the new
//! vector. Steps run in a loop, so long exchanges do not grow the stack.

use std::rc::Rc;

use gx_ir::{NodeId, Picture, Value};
use tracing::debug;

use super::Interpreter;
use crate::errors::{self, EvalError};

/// Result of running `interact` to completion.
#[derive(Clone, Debug)]
pub struct InteractOutcome {
    /// Node holding the protocol's final state.
    pub state: NodeId,
    /// Pictures drawn by the final step, in order.
    pub pictures: Vec<Rc<Picture>>,
    /// Number of `send` round trips taken on the way.
    pub round_trips: usize,
}

impl Interpreter {
    /// Run the protocol from `state` with input `vector` until it asks to
    /// render.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn interact(
        &mut self,
        protocol: NodeId,
        state: NodeId,
        vector: NodeId,
    ) -> Result<InteractOutcome, EvalError> {
        let (mut state, mut vector) = (state, vector);
        let mut round_trips = 0;
        loop {
            let step = self
                .interact_step(protocol, state, vector)
                .map_err(|e| e.with_note(format!("in interaction step {}", round_trips + 1)))?;
            state = step.state;

            if step.flag.is_zero() {
                let pictures = self.draw_all(step.data)?;
                debug!(round_trips, pictures = pictures.len(), "interaction finished");
                return Ok(InteractOutcome {
                    state,
                    pictures,
                    round_trips,
                });
            }

            let reply = self.send(step.data)?;
            round_trips += 1;
            debug!(round_trips, "interaction continues");
            vector = self.graph.literal(reply);
        }
    }

    /// Force one protocol step and take its result apart.
    fn interact_step(
        &mut self,
        protocol: NodeId,
        state: NodeId,
        vector: NodeId,
    ) -> Result<Step, EvalError> {
        let call = self.graph.apply(protocol, state);
        let call = self.graph.apply(call, vector);
        let result = self.force(call)?;

        let items = self.list_items(result, "interact")?;
        let &[flag, state, data] = items.as_slice() else {
            return Err(errors::malformed_list("interact"));
        };
        let flag = self.force(flag)?;
        if flag.as_number().is_none() {
            return Err(errors::type_mismatch("number", &flag));
        }
        let data = self.force(data)?;
        Ok(Step { flag, state, data })
    }
}

struct Step {
    flag: Value,
    state: NodeId,
    data: Value,
}
