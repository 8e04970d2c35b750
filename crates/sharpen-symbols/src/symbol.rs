//! Type symbols.

use serde::{Deserialize, Serialize};

/// Handle to a `TypeSymbol` in a `SymbolTable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
}

impl TypeKind {
    /// Classes, interfaces and delegates are reference types; structs and
    /// enums are value types.
    pub fn is_reference_type(self) -> bool {
        matches!(
            self,
            TypeKind::Class | TypeKind::Interface | TypeKind::Delegate
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
        }
    }
}

/// Types the resolver treats specially.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpecialType {
    #[default]
    None,
    /// The universal root of reference types.
    Object,
}

/// A named type: its metadata name, kind, base type and directly declared
/// interfaces. For an interface, `interfaces` holds the interfaces it extends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSymbol {
    pub name: String,
    /// Containing namespace, `None` for the global namespace.
    pub namespace: Option<String>,
    pub kind: TypeKind,
    pub special: SpecialType,
    pub base: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
}

impl TypeSymbol {
    /// A symbol with no base type and no interfaces. An empty `namespace`
    /// means the global namespace.
    pub fn new(namespace: &str, name: &str, kind: TypeKind) -> Self {
        Self {
            name: name.to_string(),
            namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
            kind,
            special: SpecialType::None,
            base: None,
            interfaces: Vec::new(),
        }
    }

    /// `Namespace.Name`, or just `Name` in the global namespace.
    pub fn metadata_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Compare against a metadata name without allocating.
    pub fn has_metadata_name(&self, metadata_name: &str) -> bool {
        match &self.namespace {
            None => self.name == metadata_name,
            Some(namespace) => metadata_name
                .strip_prefix(namespace.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(|rest| rest == self.name),
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_reference_type(&self) -> bool {
        self.kind.is_reference_type()
    }
}

impl std::fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(namespace) = &self.namespace {
            write!(f, "{namespace}.")?;
        }
        f.write_str(&self.name)
    }
}

#[cfg(test)]
#[path = "../tests/symbol_tests.rs"]
mod symbol_tests;
