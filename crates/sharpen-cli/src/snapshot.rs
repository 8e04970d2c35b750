//! Workspace snapshot files.
//!
//! A snapshot is the already-parsed input of a run: serialized syntax trees,
//! types the trees refer to but do not declare (framework types such as
//! `Xamarin.Forms.View`), and the static types of simple names.
//!
//! ```json
//! {
//!   "miscellaneous": false,
//!   "documents": [{ "name": "Page.cs", "tree": { "kind": "CompilationUnit", "children": [] } }],
//!   "types": [{ "namespace": "Xamarin.Forms", "name": "View", "kind": "class" }],
//!   "locals": [{ "name": "label", "type": "Xamarin.Forms.Label" }]
//! }
//! ```

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use sharpen_ide::{Workspace, WorkspaceKind};
use sharpen_symbols::{Compilation, SymbolTable, SymbolUniverse, TypeId, TypeKind};
use sharpen_syntax::{GreenNode, SyntaxKind, SyntaxNode};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    /// Loose files outside any project.
    #[serde(default)]
    pub miscellaneous: bool,
    pub documents: Vec<DocumentSnapshot>,
    #[serde(default)]
    pub types: Vec<TypeSnapshot>,
    #[serde(default)]
    pub locals: Vec<LocalSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub name: String,
    pub tree: GreenNode,
}

/// A type declared outside the snapshot's trees. `base` and `interfaces`
/// hold metadata names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSnapshot {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalSnapshot {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl WorkspaceSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot: {}", path.display()))?;
        Self::from_json(&source).with_context(|| format!("failed to parse snapshot: {}", path.display()))
    }

    pub fn from_json(source: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(source).context("invalid snapshot JSON")?;
        Ok(snapshot)
    }

    /// Bind the snapshot into a workspace: core library, extra types, trees,
    /// then locals.
    pub fn into_workspace(self) -> Result<Workspace> {
        let table = self.symbol_table()?;

        let mut roots = Vec::with_capacity(self.documents.len());
        let mut names = Vec::with_capacity(self.documents.len());
        for document in self.documents {
            if document.tree.kind() != SyntaxKind::CompilationUnit {
                bail!(
                    "document {} has a {} root, expected CompilationUnit",
                    document.name,
                    document.tree.kind()
                );
            }
            roots.push(SyntaxNode::new_root(document.tree));
            names.push(document.name);
        }

        let mut compilation = Compilation::new(table, roots);
        for local in &self.locals {
            let Some(ty) = compilation.type_by_metadata_name(&local.ty) else {
                bail!("local {} has unknown type {}", local.name, local.ty);
            };
            compilation.declare_local(local.name.clone(), ty);
        }

        let kind = if self.miscellaneous {
            WorkspaceKind::MiscellaneousFiles
        } else {
            WorkspaceKind::Host
        };
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let workspace = Workspace::new(kind, compilation, &names);
        tracing::debug!(
            documents = workspace.len(),
            types = self.types.len(),
            locals = self.locals.len(),
            "loaded snapshot"
        );
        Ok(workspace)
    }

    /// The core library plus the declared types. Every type is declared
    /// before bases are linked, so declarations may refer forward.
    fn symbol_table(&self) -> Result<SymbolTable> {
        let mut table = SymbolTable::with_core_library();
        let ids: Vec<_> = self
            .types
            .iter()
            .map(|ty| table.declare(&ty.namespace, &ty.name, ty.kind))
            .collect();

        for (ty, &id) in self.types.iter().zip(&ids) {
            let base = match &ty.base {
                Some(base) => Some(lookup(&table, base, &ty.name)?),
                None if ty.kind == TypeKind::Class => table.object_type().filter(|&object| object != id),
                None => None,
            };
            if let Some(base) = base
                && !table.set_base(id, base)
            {
                bail!("base type of {} would form an inheritance cycle", ty.name);
            }
            for interface in &ty.interfaces {
                let interface = lookup(&table, interface, &ty.name)?;
                table.add_interface(id, interface);
            }
        }
        Ok(table)
    }
}

fn lookup(table: &SymbolTable, metadata_name: &str, referrer: &str) -> Result<TypeId> {
    table
        .type_by_metadata_name(metadata_name)
        .with_context(|| format!("type {referrer} refers to unknown type {metadata_name}"))
}

#[cfg(test)]
#[path = "../tests/snapshot_tests.rs"]
mod snapshot_tests;
