//! Notifications the layout host emits for its collaborators.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum LayoutEvent {
    /// The layout resource to render changed. `href: None` tells the
    /// renderer to drop the stamped layout before the next one loads.
    LayoutRequested { href: Option<String> },

    /// The model handed to the renderer was replaced
    ModelChanged { document_uid: Option<String> },

    /// An in-place edit reported by the renderer, forwarded upward
    PathChanged { path: String, value: Value },

    /// `document-layout-changed`, fired once per settled render
    DocumentLayoutChanged { element: Option<String>, layout: String },

    /// The error display should be scrolled into view and focused
    ErrorsRevealed { count: usize },

    /// Auto-focus moved keyboard focus to an element
    Focused { element: String },
}
