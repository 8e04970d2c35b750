//! Persistent syntax trees for the sharpen analyzer toolkit.
//!
//! Trees come in two layers:
//! - the green layer (`GreenNode`, `GreenToken`): immutable, `Arc`-shared,
//!   position-free data; replacing a node rebuilds only its ancestor chain
//! - the red layer (`SyntaxNode`, `SyntaxToken`): cursors adding absolute
//!   offsets and parent links on top of green data
//!
//! The crate does not parse source text. Trees are built with the
//! constructors in [`factory`] or loaded from their serde representation.

pub mod kind;
pub use kind::SyntaxKind;

pub mod green;
pub use green::{GreenElement, GreenNode, GreenToken};

pub mod node;
pub use node::{SyntaxElement, SyntaxNode, SyntaxToken};

pub mod ast;
pub mod factory;

mod repr;
