//! Type hierarchy resolution.
//!
//! Both entry points walk the base-type chain with a loop, so arbitrarily
//! deep hierarchies cannot exhaust the stack.
//!
//! The two entry points treat interfaces differently. `derives_from` checks
//! the full interface closure when `expected` is an interface, while
//! `derives_from_name` only sees interfaces declared directly on each link
//! of the chain. An interface reached only through another interface is
//! therefore found by the first and missed by the second.

use crate::symbol::{SpecialType, TypeId, TypeKind};
use crate::table::SymbolUniverse;
use tracing::trace;

/// Whether `current` is, derives from, or implements `expected`.
///
/// Returns false when either side is absent.
pub fn derives_from<U>(universe: &U, current: Option<TypeId>, expected: Option<TypeId>) -> bool
where
    U: SymbolUniverse + ?Sized,
{
    let (Some(current), Some(expected)) = (current, expected) else {
        return false;
    };
    if current == expected {
        return true;
    }
    let (Some(current_symbol), Some(expected_symbol)) =
        (universe.symbol(current), universe.symbol(expected))
    else {
        return false;
    };

    let expected_name = expected_symbol.metadata_name();
    if current_symbol.has_metadata_name(&expected_name) {
        return true;
    }

    // Value types box to Object but never derive from it, even though
    // their base chain runs through System.ValueType.
    if expected_symbol.special == SpecialType::Object {
        return current_symbol.is_reference_type();
    }

    if expected_symbol.kind == TypeKind::Interface
        && universe.all_interfaces(current).contains(&expected)
    {
        trace!(current = %current_symbol, expected = %expected_symbol, "interface closure match");
        return true;
    }

    walk_base_chain(universe, current, &expected_name)
}

/// Whether the base chain of `current` (itself included) reaches a type
/// named `expected`, or a link directly declares an interface with that
/// metadata name.
pub fn derives_from_name<U>(universe: &U, current: Option<TypeId>, expected: &str) -> bool
where
    U: SymbolUniverse + ?Sized,
{
    match current {
        Some(current) => walk_base_chain(universe, current, expected),
        None => false,
    }
}

fn walk_base_chain<U>(universe: &U, start: TypeId, expected: &str) -> bool
where
    U: SymbolUniverse + ?Sized,
{
    let mut link = Some(start);
    let mut depth = 0usize;
    while let Some(current) = link {
        let Some(symbol) = universe.symbol(current) else {
            break;
        };
        if symbol.has_metadata_name(expected) {
            trace!(expected, depth, "base chain match");
            return true;
        }
        let declares_interface = universe.interfaces(current).iter().any(|&interface| {
            universe
                .symbol(interface)
                .is_some_and(|interface| interface.has_metadata_name(expected))
        });
        if declares_interface {
            trace!(expected, depth, "direct interface match");
            return true;
        }
        link = symbol.base;
        depth += 1;
    }
    trace!(expected, depth, "base chain exhausted");
    false
}

#[cfg(test)]
#[path = "../tests/hierarchy_tests.rs"]
mod hierarchy_tests;
