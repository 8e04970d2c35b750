//! Deferred document changes.

use crate::document::Document;
use sharpen_common::{CancellationToken, Cancelled};
use std::sync::Arc;

/// Computes a changed document, or gives up when the token is cancelled.
pub type CreateChangedDocument =
    dyn Fn(&CancellationToken) -> Result<Document, Cancelled> + Send + Sync;

/// A titled change that has not been computed yet.
///
/// Creating an action runs nothing; the change is computed each time
/// `changed_document` is called. Actions are cheap to clone and may be
/// invoked from any thread.
#[derive(Clone)]
pub struct CodeAction {
    title: String,
    create_changed_document: Arc<CreateChangedDocument>,
}

impl CodeAction {
    pub fn new<F>(title: impl Into<String>, create_changed_document: F) -> Self
    where
        F: Fn(&CancellationToken) -> Result<Document, Cancelled> + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            create_changed_document: Arc::new(create_changed_document),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn changed_document(&self, cancellation: &CancellationToken) -> Result<Document, Cancelled> {
        cancellation.check()?;
        (self.create_changed_document)(cancellation)
    }
}

impl std::fmt::Debug for CodeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeAction")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/code_action_tests.rs"]
mod code_action_tests;
