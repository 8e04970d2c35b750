//! The symbol universe and its in-memory implementation.

use crate::symbol::{SpecialType, TypeId, TypeKind, TypeSymbol};
use rustc_hash::{FxHashMap, FxHashSet};
use sharpen_common::well_known;
use tracing::trace;

/// Read-only view of a symbol graph.
///
/// Implementations must keep the base-type relation acyclic.
pub trait SymbolUniverse {
    fn symbol(&self, id: TypeId) -> Option<&TypeSymbol>;

    fn type_by_metadata_name(&self, metadata_name: &str) -> Option<TypeId>;

    fn base_type(&self, id: TypeId) -> Option<TypeId> {
        self.symbol(id).and_then(|symbol| symbol.base)
    }

    /// Directly declared interfaces.
    fn interfaces(&self, id: TypeId) -> &[TypeId] {
        self.symbol(id)
            .map(|symbol| symbol.interfaces.as_slice())
            .unwrap_or_default()
    }

    /// Every interface `id` implements, directly, through its base chain, or
    /// through interface inheritance. Deduplicated, in discovery order.
    fn all_interfaces(&self, id: TypeId) -> Vec<TypeId> {
        let mut seen = FxHashSet::default();
        let mut result = Vec::new();
        let mut pending: Vec<TypeId> = Vec::new();

        let mut link = Some(id);
        while let Some(current) = link {
            for &interface in self.interfaces(current) {
                if seen.insert(interface) {
                    result.push(interface);
                    pending.push(interface);
                }
            }
            link = self.base_type(current);
        }

        // Interfaces inherited by the interfaces found so far.
        let mut cursor = 0;
        while cursor < pending.len() {
            let interface = pending[cursor];
            cursor += 1;
            for &inherited in self.interfaces(interface) {
                if seen.insert(inherited) {
                    result.push(inherited);
                    pending.push(inherited);
                }
            }
        }

        result
    }
}

/// Arena of type symbols indexed by metadata name.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<TypeSymbol>,
    by_name: FxHashMap<String, TypeId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the core library types every compilation can see.
    pub fn with_core_library() -> Self {
        let mut table = Self::new();

        let object = table.add(TypeSymbol {
            special: SpecialType::Object,
            ..TypeSymbol::new("System", "Object", TypeKind::Class)
        });
        let value_type = table.add_class("System", "ValueType", object);
        let enum_type = table.add_class("System", "Enum", value_type);

        let enumerable = table.add(TypeSymbol::new(
            "System.Collections",
            "IEnumerable",
            TypeKind::Interface,
        ));
        table.add(TypeSymbol {
            interfaces: vec![enumerable],
            ..TypeSymbol::new(
                "System.Collections.Generic",
                "IEnumerable`1",
                TypeKind::Interface,
            )
        });
        table.add(TypeSymbol::new("System", "IDisposable", TypeKind::Interface));
        let attribute_interface = table.add(TypeSymbol::new(
            "System.Runtime.InteropServices",
            "_Attribute",
            TypeKind::Interface,
        ));

        table.add(TypeSymbol {
            base: Some(object),
            interfaces: vec![enumerable],
            ..TypeSymbol::new("System", "String", TypeKind::Class)
        });
        table.add(TypeSymbol {
            base: Some(value_type),
            ..TypeSymbol::new("System", "Int32", TypeKind::Struct)
        });

        let attribute = table.add(TypeSymbol {
            base: Some(object),
            interfaces: vec![attribute_interface],
            ..TypeSymbol::new("System", "Attribute", TypeKind::Class)
        });
        table.add_class("System", "AttributeUsageAttribute", attribute);
        table.add(TypeSymbol {
            base: Some(enum_type),
            ..TypeSymbol::new("System", "AttributeTargets", TypeKind::Enum)
        });

        table
    }

    fn add_class(&mut self, namespace: &str, name: &str, base: TypeId) -> TypeId {
        self.add(TypeSymbol {
            base: Some(base),
            ..TypeSymbol::new(namespace, name, TypeKind::Class)
        })
    }

    /// Add `symbol`, replacing any symbol with the same metadata name.
    ///
    /// When replacing, a base that would close a cycle is dropped.
    pub fn add(&mut self, mut symbol: TypeSymbol) -> TypeId {
        let metadata_name = symbol.metadata_name();
        match self.by_name.get(&metadata_name) {
            Some(&id) => {
                let base = symbol.base.take();
                self.symbols[id.index()] = symbol;
                if let Some(base) = base {
                    self.set_base(id, base);
                }
                id
            }
            None => {
                // Nothing can derive from a symbol that did not exist yet.
                let id = TypeId(self.symbols.len() as u32);
                self.symbols.push(symbol);
                self.by_name.insert(metadata_name, id);
                id
            }
        }
    }

    /// The id for `namespace.name`, adding an empty symbol of `kind` when the
    /// name is unknown.
    pub fn declare(&mut self, namespace: &str, name: &str, kind: TypeKind) -> TypeId {
        let symbol = TypeSymbol::new(namespace, name, kind);
        match self.by_name.get(&symbol.metadata_name()) {
            Some(&id) => id,
            None => self.add(symbol),
        }
    }

    /// Set the base type of `id`. Returns false, leaving the symbol
    /// unchanged, when `base` already derives from `id`.
    pub fn set_base(&mut self, id: TypeId, base: TypeId) -> bool {
        let mut link = Some(base);
        while let Some(current) = link {
            if current == id {
                trace!(
                    type_id = id.0,
                    base_id = base.0,
                    "rejecting base type that closes an inheritance cycle"
                );
                return false;
            }
            link = self.base_type(current);
        }
        match self.symbols.get_mut(id.index()) {
            Some(symbol) => {
                symbol.base = Some(base);
                true
            }
            None => false,
        }
    }

    pub fn add_interface(&mut self, id: TypeId, interface: TypeId) {
        if let Some(symbol) = self.symbols.get_mut(id.index())
            && !symbol.interfaces.contains(&interface)
        {
            symbol.interfaces.push(interface);
        }
    }

    pub fn object_type(&self) -> Option<TypeId> {
        self.type_by_metadata_name(well_known::SYSTEM_OBJECT)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeSymbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| (TypeId(index as u32), symbol))
    }
}

impl SymbolUniverse for SymbolTable {
    fn symbol(&self, id: TypeId) -> Option<&TypeSymbol> {
        self.symbols.get(id.index())
    }

    fn type_by_metadata_name(&self, metadata_name: &str) -> Option<TypeId> {
        self.by_name.get(metadata_name).copied()
    }
}

#[cfg(test)]
#[path = "../tests/table_tests.rs"]
mod table_tests;
