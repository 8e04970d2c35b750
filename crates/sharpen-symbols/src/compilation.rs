//! Binding syntax trees into a symbol table.
//!
//! `Compilation::new` declares every class, struct and interface found in
//! the trees, then resolves their base lists once all names are known.
//! `SemanticModel` answers the two questions the analyzers ask: the static
//! type of an expression and the type a name refers to.

use crate::symbol::{TypeId, TypeKind};
use crate::table::{SymbolTable, SymbolUniverse};
use rustc_hash::FxHashMap;
use sharpen_common::well_known;
use sharpen_syntax::ast::{self, TypeDeclaration, UsingDirective};
use sharpen_syntax::{SyntaxKind, SyntaxNode};
use tracing::{debug, trace};

/// Symbols for a set of syntax trees.
#[derive(Clone, Debug, Default)]
pub struct Compilation {
    table: SymbolTable,
    trees: Vec<SyntaxNode>,
    locals: FxHashMap<String, TypeId>,
}

impl Compilation {
    /// Bind the type declarations of `trees` into `table`.
    pub fn new(table: SymbolTable, trees: impl IntoIterator<Item = SyntaxNode>) -> Self {
        let mut compilation = Self {
            table,
            trees: trees.into_iter().collect(),
            locals: FxHashMap::default(),
        };
        compilation.bind();
        compilation
    }

    fn bind(&mut self) {
        let declarations: Vec<TypeDeclaration> = self
            .trees
            .iter()
            .flat_map(|tree| tree.descendants().filter_map(TypeDeclaration::cast))
            .collect();

        // Declare first so base lists may refer to types declared later.
        let mut declared = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            let Some(name) = declaration.name() else {
                continue;
            };
            let namespace = ast::containing_namespace(declaration.syntax()).unwrap_or_default();
            let kind = match declaration.kind() {
                SyntaxKind::StructDeclaration => TypeKind::Struct,
                SyntaxKind::InterfaceDeclaration => TypeKind::Interface,
                _ => TypeKind::Class,
            };
            let id = self.table.declare(&namespace, &name, kind);
            declared.push((id, kind, declaration));
        }

        for (id, kind, declaration) in &declared {
            self.bind_bases(*id, *kind, declaration);
        }

        debug!(
            trees = self.trees.len(),
            declarations = declared.len(),
            symbols = self.table.len(),
            "bound compilation"
        );
    }

    fn bind_bases(&mut self, id: TypeId, kind: TypeKind, declaration: &TypeDeclaration) {
        let mut base = None;
        let mut interfaces = Vec::new();
        if let Some(base_list) = declaration.base_list() {
            for ty in base_list.types().iter().filter_map(|base| base.ty()) {
                let Some(resolved) = resolve_type_syntax(&self.table, &ty) else {
                    trace!(name = %ty.text(), "unresolved base type");
                    continue;
                };
                let is_interface = self
                    .table
                    .symbol(resolved)
                    .is_some_and(|symbol| symbol.is_interface());
                if is_interface {
                    interfaces.push(resolved);
                } else if kind == TypeKind::Class && base.is_none() {
                    base = Some(resolved);
                }
            }
        }

        let default_base = match kind {
            TypeKind::Class => well_known::SYSTEM_OBJECT,
            TypeKind::Struct => well_known::SYSTEM_VALUE_TYPE,
            _ => "",
        };
        let base = base.or_else(|| {
            self.table
                .type_by_metadata_name(default_base)
                .filter(|&default| default != id)
        });
        if let Some(base) = base {
            self.table.set_base(id, base);
        }
        for interface in interfaces {
            self.table.add_interface(id, interface);
        }
    }

    /// Record the static type of a simple name or dotted receiver such as
    /// `view` or `this.label`.
    pub fn declare_local(&mut self, name: impl Into<String>, ty: TypeId) {
        self.locals.insert(name.into(), ty);
    }

    pub fn local(&self, name: &str) -> Option<TypeId> {
        self.locals.get(name).copied()
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn trees(&self) -> &[SyntaxNode] {
        &self.trees
    }

    pub fn semantic_model(&self, root: &SyntaxNode) -> SemanticModel<'_> {
        SemanticModel {
            compilation: self,
            root: root.clone(),
        }
    }
}

impl SymbolUniverse for Compilation {
    fn symbol(&self, id: TypeId) -> Option<&crate::TypeSymbol> {
        self.table.symbol(id)
    }

    fn type_by_metadata_name(&self, metadata_name: &str) -> Option<TypeId> {
        self.table.type_by_metadata_name(metadata_name)
    }
}

/// Semantic queries over one tree of a compilation.
#[derive(Clone, Debug)]
pub struct SemanticModel<'a> {
    compilation: &'a Compilation,
    root: SyntaxNode,
}

impl<'a> SemanticModel<'a> {
    pub fn compilation(&self) -> &'a Compilation {
        self.compilation
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Static type of an expression: locals first, then type names, with
    /// literals typed as `System.String` and `System.Int32`.
    pub fn type_of(&self, expression: &SyntaxNode) -> Option<TypeId> {
        match expression.kind() {
            SyntaxKind::StringLiteralExpression => self
                .compilation
                .type_by_metadata_name(well_known::SYSTEM_STRING),
            SyntaxKind::NumericLiteralExpression => {
                self.compilation.type_by_metadata_name("System.Int32")
            }
            SyntaxKind::IdentifierName | SyntaxKind::SimpleMemberAccessExpression => {
                let name = ast::dotted_name(expression)?;
                self.compilation
                    .local(&name)
                    .or_else(|| resolve_type_in(&self.compilation.table, &name, expression, false))
            }
            _ => None,
        }
    }

    /// The type named by `name` (`IdentifierName` or `QualifiedName`).
    pub fn resolve_type(&self, name: &SyntaxNode) -> Option<TypeId> {
        resolve_type_syntax(&self.compilation.table, name)
    }

    /// Resolve dotted text as if it were written at `position`. With
    /// `attribute` set, `Name` also tries `NameAttribute`.
    pub fn resolve_type_name(
        &self,
        dotted: &str,
        position: &SyntaxNode,
        attribute: bool,
    ) -> Option<TypeId> {
        resolve_type_in(&self.compilation.table, dotted, position, attribute)
    }
}

fn resolve_type_syntax(table: &SymbolTable, name: &SyntaxNode) -> Option<TypeId> {
    let dotted = ast::dotted_name(name)?;
    resolve_type_in(table, &dotted, name, false)
}

/// Resolve a dotted type name as seen from `position` in the tree: fully
/// qualified first, then each enclosing namespace from the innermost out,
/// then each `using` in scope.
fn resolve_type_in(
    table: &SymbolTable,
    dotted: &str,
    position: &SyntaxNode,
    attribute: bool,
) -> Option<TypeId> {
    let lookup = |candidate: &str| {
        table.type_by_metadata_name(candidate).or_else(|| {
            if attribute && !candidate.ends_with(well_known::ATTRIBUTE_SUFFIX) {
                table.type_by_metadata_name(&format!("{candidate}{}", well_known::ATTRIBUTE_SUFFIX))
            } else {
                None
            }
        })
    };

    if let Some(id) = lookup(dotted) {
        return Some(id);
    }

    if let Some(namespace) = ast::containing_namespace(position) {
        let mut scope = namespace.as_str();
        loop {
            if let Some(id) = lookup(&format!("{scope}.{dotted}")) {
                return Some(id);
            }
            match scope.rfind('.') {
                Some(dot) => scope = &scope[..dot],
                None => break,
            }
        }
    }

    using_namespaces(position)
        .into_iter()
        .find_map(|namespace| lookup(&format!("{namespace}.{dotted}")))
}

/// Namespaces imported by `using` directives in the containers enclosing
/// `node`, innermost container first.
fn using_namespaces(node: &SyntaxNode) -> Vec<String> {
    node.ancestors()
        .filter(|ancestor| ancestor.kind().is_container())
        .flat_map(|container| {
            container
                .children()
                .filter_map(UsingDirective::cast)
                .filter_map(|using| using.name())
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/compilation_tests.rs"]
mod compilation_tests;
