//! Values: the outermost form of a forced node.

use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;
use num_traits::Zero;
use smallvec::SmallVec;

use crate::{Instruction, NodeId};

/// Arguments captured by a partially applied instruction.
///
/// At most `arity - 1` arguments are ever captured, so two inline slots
/// cover every instruction without heap allocation.
pub type PartialArgs = SmallVec<[NodeId; 2]>;

/// A built-in instruction waiting for more arguments.
///
/// Captured arguments stay unevaluated; this is how laziness survives
/// partial application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partial {
    pub op: Instruction,
    pub args: PartialArgs,
}

impl Partial {
    /// An instruction with no arguments captured yet.
    pub fn bare(op: Instruction) -> Self {
        Partial {
            op,
            args: PartialArgs::new(),
        }
    }

    /// Number of argument positions still open.
    pub fn remaining(&self) -> usize {
        self.op.arity().saturating_sub(self.args.len())
    }
}

/// A screen coordinate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

/// One renderable layer: an ordered sequence of points.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Picture {
    points: Vec<Point>,
}

impl Picture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point. Only `draw` builds pictures.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inclusive bounding box `(min, max)`, or `None` for an empty picture.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

impl FromIterator<Point> for Picture {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Picture {
            points: iter.into_iter().collect(),
        }
    }
}

/// The result of forcing a node.
///
/// `Nil`, `True` and `False` are dedicated tags rather than closures, so
/// `isnil` and the debug printer recognise them by tag alone.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(BigInt),
    Nil,
    True,
    False,
    /// A built-in with zero or more (but not all) arguments captured.
    Partial(Partial),
    /// A bit-string produced by `mod`.
    Modulated(Rc<str>),
    Picture(Rc<Picture>),
}

impl Value {
    /// The value an instruction name is bound to in a fresh environment.
    pub fn from_instruction(op: Instruction) -> Self {
        match op {
            Instruction::Nil => Value::Nil,
            Instruction::True => Value::True,
            Instruction::False => Value::False,
            op => Value::Partial(Partial::bare(op)),
        }
    }

    /// Build a number value.
    pub fn int(n: impl Into<BigInt>) -> Self {
        Value::Number(n.into())
    }

    /// The `t`/`f` sentinel for a Rust bool.
    pub fn bool(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }

    /// A cons pair over two existing nodes.
    pub fn pair(head: NodeId, tail: NodeId) -> Self {
        let mut args = PartialArgs::new();
        args.push(head);
        args.push(tail);
        Value::Partial(Partial {
            op: Instruction::Cons,
            args,
        })
    }

    pub fn as_number(&self) -> Option<&BigInt> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_zero())
    }

    /// Head and tail nodes when this is a fully built `cons`/`vec` pair.
    pub fn as_pair(&self) -> Option<(NodeId, NodeId)> {
        match self {
            Value::Partial(Partial { op, args }) if op.is_pair_constructor() && args.len() == 2 => {
                Some((args[0], args[1]))
            }
            _ => None,
        }
    }

    /// Whether applying this value to an argument is meaningful.
    pub fn is_callable(&self) -> bool {
        matches!(
            self,
            Value::Nil | Value::True | Value::False | Value::Partial(_)
        )
    }

    /// Short type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Nil => "nil",
            Value::True | Value::False => "boolean",
            Value::Partial(p) if p.args.len() == 2 && p.op.is_pair_constructor() => "pair",
            Value::Partial(_) => "function",
            Value::Modulated(_) => "modulated",
            Value::Picture(_) => "picture",
        }
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Number(n)
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Picture")
    }
}
