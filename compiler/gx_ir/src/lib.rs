//! Galaxy IR - the data the interpreter manipulates.
//!
//! This crate contains the core data structures shared by the parser and the
//! evaluator:
//! - `Name` and `StringInterner` for identifiers
//! - `NodeId` and `Graph`, the arena-allocated expression graph
//! - `Value`, the outermost form of a forced node
//! - `Instruction`, the fixed catalog of built-in operations
//! - `Picture` and `Point`, the output of `draw`
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`
//! - **Flatten Everything**: no `Rc<Node>` trees, nodes refer to each other
//!   through `NodeId(u32)` indices into one `Graph`
//! - **Memoize in place**: every node owns a write-once memo cell, which is
//!   what gives call-by-need sharing across combinator expansion

mod graph;
mod instruction;
mod interner;
mod name;
mod node_id;
mod value;

pub use graph::{Graph, Memo, NodeKind};
pub use instruction::Instruction;
pub use interner::StringInterner;
pub use name::Name;
pub use node_id::NodeId;
pub use value::{Partial, PartialArgs, Picture, Point, Value};

pub use num_bigint::BigInt;
