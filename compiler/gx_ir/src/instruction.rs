//! The fixed catalog of built-in operations.
//!
//! Every built-in is a curried function of a fixed number of argument
//! positions. Arguments are captured as unevaluated `NodeId`s until the last
//! position is filled, at which point the evaluator dispatches on the
//! `Instruction` tag.

use std::fmt;

/// A built-in operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Instruction {
    // Arithmetic
    Inc,
    Dec,
    Add,
    Mul,
    Div,
    Neg,
    Pwr2,

    // Comparison
    Eq,
    Lt,
    If0,

    // Combinators
    True,
    False,
    I,
    S,
    C,
    B,

    // Lists
    Cons,
    Car,
    Cdr,
    Nil,
    IsNil,
    Vec,

    // Codec and transport
    Mod,
    Dem,
    Send,

    // Output
    Draw,
    MultipleDraw,
    Interact,
}

impl Instruction {
    /// Every instruction, in catalog order.
    pub const ALL: [Instruction; 28] = [
        Instruction::Inc,
        Instruction::Dec,
        Instruction::Add,
        Instruction::Mul,
        Instruction::Div,
        Instruction::Neg,
        Instruction::Pwr2,
        Instruction::Eq,
        Instruction::Lt,
        Instruction::If0,
        Instruction::True,
        Instruction::False,
        Instruction::I,
        Instruction::S,
        Instruction::C,
        Instruction::B,
        Instruction::Cons,
        Instruction::Car,
        Instruction::Cdr,
        Instruction::Nil,
        Instruction::IsNil,
        Instruction::Vec,
        Instruction::Mod,
        Instruction::Dem,
        Instruction::Send,
        Instruction::Draw,
        Instruction::MultipleDraw,
        Instruction::Interact,
    ];

    /// The name this instruction is bound to in a fresh environment.
    pub const fn name(self) -> &'static str {
        match self {
            Instruction::Inc => "inc",
            Instruction::Dec => "dec",
            Instruction::Add => "add",
            Instruction::Mul => "mul",
            Instruction::Div => "div",
            Instruction::Neg => "neg",
            Instruction::Pwr2 => "pwr2",
            Instruction::Eq => "eq",
            Instruction::Lt => "lt",
            Instruction::If0 => "if0",
            Instruction::True => "t",
            Instruction::False => "f",
            Instruction::I => "i",
            Instruction::S => "s",
            Instruction::C => "c",
            Instruction::B => "b",
            Instruction::Cons => "cons",
            Instruction::Car => "car",
            Instruction::Cdr => "cdr",
            Instruction::Nil => "nil",
            Instruction::IsNil => "isnil",
            Instruction::Vec => "vec",
            Instruction::Mod => "mod",
            Instruction::Dem => "dem",
            Instruction::Send => "send",
            Instruction::Draw => "draw",
            Instruction::MultipleDraw => "multipledraw",
            Instruction::Interact => "interact",
        }
    }

    /// Look up an instruction by its bound name.
    pub fn from_name(name: &str) -> Option<Instruction> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Number of curried argument positions.
    ///
    /// `nil` has arity 0: it is a constant, and applying it is handled by the
    /// evaluator as "ignore the argument and answer `t`".
    pub const fn arity(self) -> usize {
        match self {
            Instruction::Nil => 0,
            Instruction::Inc
            | Instruction::Dec
            | Instruction::Neg
            | Instruction::Pwr2
            | Instruction::If0
            | Instruction::I
            | Instruction::Car
            | Instruction::Cdr
            | Instruction::IsNil
            | Instruction::Mod
            | Instruction::Dem
            | Instruction::Send
            | Instruction::Draw
            | Instruction::MultipleDraw => 1,
            Instruction::Add
            | Instruction::Mul
            | Instruction::Div
            | Instruction::Eq
            | Instruction::Lt
            | Instruction::True
            | Instruction::False => 2,
            Instruction::S
            | Instruction::C
            | Instruction::B
            | Instruction::Cons
            | Instruction::Vec
            | Instruction::Interact => 3,
        }
    }

    /// True for `cons` and its alias `vec`.
    #[inline]
    pub const fn is_pair_constructor(self) -> bool {
        matches!(self, Instruction::Cons | Instruction::Vec)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
