//! # Layout Resolver
//!
//! Decides which layout definition a document should be rendered with, and
//! whether the layout that is already stamped may be kept.
//!
//! ```text
//! (document, mode, previous) → Resolution { reuse_layout, layout_ref }
//! ```
//!
//! A layout is kept only while the same document (by uid) stays bound.
//! Navigating to another document always restamps, so edits in flight on
//! the old document cannot leak into the new one.

use std::fmt;

use doclayout_common::Document;
use serde::{Deserialize, Serialize};

use crate::LayoutConfig;

/// Presentation variant requested by the host (`view`, `edit`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutMode(String);

impl LayoutMode {
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    pub fn view() -> Self {
        Self::new("view")
    }

    pub fn edit() -> Self {
        Self::new("edit")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::view()
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayoutMode {
    fn from(mode: &str) -> Self {
        Self::new(mode)
    }
}

impl From<String> for LayoutMode {
    fn from(mode: String) -> Self {
        Self(mode)
    }
}

/// Identifier of a layout definition: `<type>-<mode>-layout`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutRef {
    /// Lowercased document type
    doc_type: String,
    name: String,
}

impl LayoutRef {
    pub fn new(doc_type: &str, mode: &LayoutMode) -> Self {
        let doc_type = doc_type.to_lowercase();
        let name = format!("{}-{}-layout", doc_type, mode);
        Self { doc_type, name }
    }

    pub fn for_document(document: &Document, mode: &LayoutMode) -> Self {
        Self::new(&document.doc_type, mode)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Resource location handed to the rendering collaborator:
    /// `[<base>/]<type>/[<prefix>-]<name>.<ext>`
    pub fn href(&self, config: &LayoutConfig) -> String {
        let file = match config.element_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{}-{}", prefix, self.name),
            _ => self.name.clone(),
        };
        let relative = format!("{}/{}.{}", self.doc_type, file, config.extension);

        let base = config.base_url.trim_end_matches('/');
        if base.is_empty() {
            relative
        } else {
            format!("{}/{}", base, relative)
        }
    }
}

impl fmt::Display for LayoutRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Outcome of resolving a document change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Whether the stamped layout may be kept
    pub reuse_layout: bool,

    /// Layout to load; `None` means "no layout change"
    pub layout_ref: Option<LayoutRef>,
}

impl Resolution {
    /// Nothing to do (cancel sentinel)
    pub fn unchanged() -> Self {
        Self {
            reuse_layout: true,
            layout_ref: None,
        }
    }

    /// A full restamp is required, not merely a model update
    pub fn forces_reload(&self) -> bool {
        !self.reuse_layout
    }
}

/// Resolve the layout for `document` in `mode`.
///
/// `document` is `None` for the cancel sentinel, which never recomputes the
/// layout reference.
pub fn resolve(document: Option<&Document>, mode: &LayoutMode, previous: Option<&Document>) -> Resolution {
    let Some(document) = document else {
        return Resolution::unchanged();
    };

    let reuse_layout = previous.is_some_and(|prev| prev.same_identity(document));

    Resolution {
        reuse_layout,
        layout_ref: Some(LayoutRef::for_document(document, mode)),
    }
}
