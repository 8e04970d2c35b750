//! Type symbols for the sharpen analyzer toolkit.
//!
//! - `SymbolTable`: an arena of `TypeSymbol`s, the in-memory
//!   `SymbolUniverse`, seeded with the core library types
//! - `hierarchy`: `derives_from` / `derives_from_name`
//! - `Compilation`: binds declarations found in syntax trees and answers
//!   semantic queries through `SemanticModel`

pub mod symbol;
pub use symbol::{SpecialType, TypeId, TypeKind, TypeSymbol};

pub mod table;
pub use table::{SymbolTable, SymbolUniverse};

pub mod hierarchy;
pub use hierarchy::{derives_from, derives_from_name};

pub mod compilation;
pub use compilation::{Compilation, SemanticModel};
