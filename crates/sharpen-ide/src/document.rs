//! Documents and the workspace that owns them.
//!
//! A `Document` is an immutable snapshot: a syntax root plus the compilation
//! it was bound in. Changing a document produces a new snapshot; the
//! `Workspace` decides which snapshot is current.

use dashmap::DashMap;
use sharpen_symbols::{Compilation, SemanticModel};
use sharpen_syntax::{GreenNode, SyntaxNode};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u32);

#[derive(Clone, Debug)]
pub struct Document {
    id: DocumentId,
    name: Arc<str>,
    root: SyntaxNode,
    compilation: Arc<Compilation>,
}

impl Document {
    pub fn new(
        id: DocumentId,
        name: impl Into<Arc<str>>,
        root: SyntaxNode,
        compilation: Arc<Compilation>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            root,
            compilation,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    pub fn compilation(&self) -> &Arc<Compilation> {
        &self.compilation
    }

    pub fn semantic_model(&self) -> SemanticModel<'_> {
        self.compilation.semantic_model(&self.root)
    }

    /// Rendered source text.
    pub fn text(&self) -> String {
        self.root.text()
    }

    /// The same document with a new syntax root.
    #[must_use]
    pub fn with_syntax_root(&self, root: GreenNode) -> Document {
        Document {
            id: self.id,
            name: Arc::clone(&self.name),
            root: SyntaxNode::new_root(root),
            compilation: Arc::clone(&self.compilation),
        }
    }
}

/// Where a workspace came from. Loose files opened outside any project land
/// in `MiscellaneousFiles`, where refactorings are not offered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WorkspaceKind {
    #[default]
    Host,
    MiscellaneousFiles,
}

/// The current snapshot of every document.
///
/// Safe to share across threads; applying a change replaces one document
/// without blocking readers of the others.
#[derive(Debug)]
pub struct Workspace {
    kind: WorkspaceKind,
    compilation: Arc<Compilation>,
    documents: DashMap<DocumentId, Document>,
}

impl Workspace {
    /// One document per tree of `compilation`, named by `names` in order.
    /// Trees without a name get `document<N>.cs`.
    pub fn new(kind: WorkspaceKind, compilation: Compilation, names: &[&str]) -> Self {
        let compilation = Arc::new(compilation);
        let documents = DashMap::new();
        for (index, root) in compilation.trees().iter().enumerate() {
            let id = DocumentId(index as u32);
            let name = names
                .get(index)
                .map_or_else(|| format!("document{index}.cs"), |name| (*name).to_string());
            documents.insert(
                id,
                Document::new(id, name, root.clone(), Arc::clone(&compilation)),
            );
        }
        Self {
            kind,
            compilation,
            documents,
        }
    }

    pub fn kind(&self) -> WorkspaceKind {
        self.kind
    }

    pub fn compilation(&self) -> &Arc<Compilation> {
        &self.compilation
    }

    pub fn document(&self, id: DocumentId) -> Option<Document> {
        self.documents.get(&id).map(|entry| entry.value().clone())
    }

    pub fn document_by_name(&self, name: &str) -> Option<Document> {
        self.documents
            .iter()
            .find(|entry| entry.value().name() == name)
            .map(|entry| entry.value().clone())
    }

    /// Current snapshots, ordered by id.
    pub fn documents(&self) -> Vec<Document> {
        let mut documents: Vec<Document> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        documents.sort_by_key(Document::id);
        documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Make `document` the current snapshot for its id. Returns false when
    /// the workspace has no document with that id.
    pub fn try_apply_changes(&self, document: Document) -> bool {
        match self.documents.get_mut(&document.id()) {
            Some(mut entry) => {
                tracing::debug!(document = document.name(), "applied document change");
                *entry = document;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../tests/document_tests.rs"]
mod document_tests;
