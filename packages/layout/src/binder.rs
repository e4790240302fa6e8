//! # Model Binder
//!
//! Owns the model handed to the rendering collaborator. The model is always
//! replaced wholesale, never mutated in depth, so the collaborator sees a
//! new binding whenever the bound document changes.

use doclayout_common::Document;
use serde::Serialize;
use tracing::debug;

/// Data model bound to the stamped layout.
///
/// `document: None` is the cancel sentinel: the view is unbound.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    pub document: Option<Document>,
}

impl Model {
    pub fn bound(document: Document) -> Self {
        Self {
            document: Some(document),
        }
    }

    pub fn unbound() -> Self {
        Self { document: None }
    }

    pub fn is_bound(&self) -> bool {
        self.document.is_some()
    }
}

/// What `bind` did with the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// Model replaced with the new document
    Replaced,
    /// Type changed; model kept stale until the new layout is ready
    Deferred,
    /// Cancel sentinel; model cleared
    Unbound,
}

#[derive(Debug, Default)]
pub struct ModelBinder {
    model: Model,
    stale: bool,
}

impl ModelBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the model for a document change.
    ///
    /// Same-type navigation swaps the data under the mounted layout. A type
    /// change leaves the old model in place so the new document is never
    /// bound to a widget tree built for another type.
    pub fn bind(&mut self, document: Option<&Document>, previous: Option<&Document>) -> BindOutcome {
        let Some(document) = document else {
            self.model = Model::unbound();
            self.stale = false;
            return BindOutcome::Unbound;
        };

        match previous {
            Some(prev) if !prev.same_type(document) => {
                debug!(
                    from = %prev.doc_type,
                    to = %document.doc_type,
                    "Type changed, deferring model bind until layout is ready"
                );
                self.stale = true;
                BindOutcome::Deferred
            }
            _ => {
                self.model = Model::bound(document.clone());
                self.stale = false;
                BindOutcome::Replaced
            }
        }
    }

    /// Follow-up bind once the new layout is stamped.
    pub fn layout_ready(&mut self, current: Option<&Document>) {
        self.model = Model {
            document: current.cloned(),
        };
        self.stale = false;
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Whether the model still holds a document of the previous type
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub(crate) fn document_mut(&mut self) -> Option<&mut Document> {
        self.model.document.as_mut()
    }
}
