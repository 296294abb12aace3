//! Conversions between lazy values and concrete trees.
//!
//! - `reify`: force a value down to a `Data` tree for the codec
//! - `value_from_data`: rebuild values out of literal nodes
//! - list and picture helpers used by `draw`, `multipledraw` and `interact`

use std::rc::Rc;

use gx_ir::{NodeId, Picture, Point, Value};
use gx_modem::Data;
use gx_stack::ensure_sufficient_stack;
use num_traits::ToPrimitive;

use super::Interpreter;
use crate::errors::{self, EvalError};

impl Interpreter {
    /// Force `value` into a tree of numbers, `nil` and pairs.
    ///
    /// Pairs may be built or encoded (see `pair_nodes`). Anything else
    /// (other functions, pictures, modulated bits) has no wire form and is a
    /// type mismatch.
    pub fn reify(&mut self, value: Value) -> Result<Data, EvalError> {
        let mut heads = Vec::new();
        let mut cur = value;
        while let Some((head, tail)) = self.pair_nodes(&cur) {
            let head = self.force(head)?;
            heads.push(ensure_sufficient_stack(|| self.reify(head))?);
            cur = self.force(tail)?;
        }
        let last = match cur {
            Value::Number(n) => Data::Number(n),
            Value::Nil => Data::Nil,
            other => return Err(errors::type_mismatch("number, nil or pair", &other)),
        };
        Ok(heads
            .into_iter()
            .rev()
            .fold(last, |tail, head| Data::cons(head, tail)))
    }

    /// Force `node` and reify the result.
    pub fn reify_node(&mut self, node: NodeId) -> Result<Data, EvalError> {
        let value = self.force(node)?;
        self.reify(value)
    }

    /// Build the value of a `Data` tree; pairs point at fresh literal nodes.
    pub fn value_from_data(&mut self, data: &Data) -> Value {
        let mut heads = Vec::new();
        let mut cur = data;
        while let Data::Cons(head, tail) = cur {
            heads.push(head.as_ref());
            cur = tail;
        }
        let mut value = match cur {
            Data::Number(n) => Value::Number(n.clone()),
            _ => Value::Nil,
        };
        for head in heads.into_iter().rev() {
            let head = ensure_sufficient_stack(|| self.value_from_data(head));
            let head = self.graph.literal(head);
            let tail = self.graph.literal(value);
            value = Value::pair(head, tail);
        }
        value
    }

    /// Head and tail nodes of a pair-like value.
    ///
    /// Built pairs are taken apart directly. A function still waiting for
    /// one argument is read through the pair encoding: its head is the
    /// value applied to `t`, its tail the value applied to `f`. Both stay
    /// unforced.
    pub(super) fn pair_nodes(&mut self, value: &Value) -> Option<(NodeId, NodeId)> {
        if let Some(pair) = value.as_pair() {
            return Some(pair);
        }
        match value {
            Value::Partial(partial) if partial.remaining() == 1 => {
                let node = self.graph.literal(value.clone());
                let head = self.graph.apply(node, self.sentinels.t);
                let tail = self.graph.apply(node, self.sentinels.f);
                Some((head, tail))
            }
            _ => None,
        }
    }

    /// A literal node holding `data`.
    pub fn data_node(&mut self, data: &Data) -> NodeId {
        let value = self.value_from_data(data);
        self.graph.literal(value)
    }

    /// A `nil`-terminated list over existing nodes.
    pub(super) fn list_value(&mut self, items: Vec<NodeId>) -> Value {
        let mut list = Value::Nil;
        for item in items.into_iter().rev() {
            let tail = self.graph.literal(list);
            list = Value::pair(item, tail);
        }
        list
    }

    /// Element nodes of a proper list, forcing the spine but not the elements.
    pub(super) fn list_items(
        &mut self,
        value: Value,
        context: &'static str,
    ) -> Result<Vec<NodeId>, EvalError> {
        let mut items = Vec::new();
        let mut cur = value;
        loop {
            if cur.is_nil() {
                return Ok(items);
            }
            let Some((head, tail)) = self.pair_nodes(&cur) else {
                return Err(errors::malformed_list(context));
            };
            items.push(head);
            cur = self.force(tail)?;
        }
    }

    /// Read a list of `(x, y)` vectors into a picture.
    pub(super) fn picture_from(&mut self, value: Value) -> Result<Picture, EvalError> {
        let mut picture = Picture::new();
        for item in self.list_items(value, "draw")? {
            let point = self.force(item)?;
            let Some((x, y)) = self.pair_nodes(&point) else {
                return Err(errors::type_mismatch("coordinate pair", &point));
            };
            let x = self.coordinate(x)?;
            let y = self.coordinate(y)?;
            picture.push(Point::new(x, y));
        }
        Ok(picture)
    }

    fn coordinate(&mut self, node: NodeId) -> Result<i64, EvalError> {
        match self.force(node)? {
            Value::Number(n) => n.to_i64().ok_or_else(|| errors::coordinate_out_of_range(&n)),
            other => Err(errors::type_mismatch("number", &other)),
        }
    }

    /// `draw` every sub-list of `value`, in order.
    pub(super) fn draw_all(&mut self, value: Value) -> Result<Vec<Rc<Picture>>, EvalError> {
        let layers = self.list_items(value, "multipledraw")?;
        let mut pictures = Vec::with_capacity(layers.len());
        for layer in layers {
            let points = self.force(layer)?;
            let picture = self.picture_from(points)?;
            pictures.push(self.push_picture(picture));
        }
        Ok(pictures)
    }

    /// A list value whose elements are the given pictures.
    pub(super) fn picture_list(&mut self, pictures: Vec<Rc<Picture>>) -> Value {
        let items = pictures
            .into_iter()
            .map(|picture| self.graph.literal(Value::Picture(picture)))
            .collect();
        self.list_value(items)
    }
}
