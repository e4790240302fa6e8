//! # Doclayout
//!
//! Resolves which layout a typed document is rendered with, keeps the
//! rendered model bound without losing in-flight edits, and maps
//! server-side validation reports back onto the widgets that caused them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host page: document + mode changes          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ DocumentLayout                              │
//! │  - resolver: layout ref, reuse vs restamp   │
//! │  - binder: model replace / defer / unbind   │
//! │  - violations: report → messages + flags    │
//! │  - focus: first auto-focus input            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: stamps layout, owns widgets       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Rendering, schema validation and transport belong to collaborators.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use doclayout::{BindingTable, Catalog, DocumentLayout, LayoutConfig, LayoutMode};
//!
//! let mut layout = DocumentLayout::new(LayoutConfig::default());
//! layout.set_mode(LayoutMode::edit());
//! layout.set_document(document);
//!
//! // renderer stamped the layout and finished painting
//! layout.element_changed(Some(element));
//! layout.render_settled();
//!
//! // validation service answered
//! layout.report_validation(&report, &mut bindings, &catalog);
//! for event in layout.take_events() {
//!     // forward to collaborators
//! }
//! ```

mod binder;
mod bindings;
mod config;
mod errors;
mod events;
mod focus;
mod host;
mod i18n;
mod resolver;
mod settle;
mod tree;
mod violations;

pub use binder::{BindOutcome, Model, ModelBinder};
pub use bindings::{BindingTable, WidgetBindings, WidgetId};
pub use config::{LayoutConfig, DEFAULT_CONFIG_NAME};
pub use errors::LayoutError;
pub use events::LayoutEvent;
pub use focus::{apply_auto_focus, find_focusable, Focusable};
pub use host::{DocumentLayout, DocumentState};
pub use i18n::{format_template, render_arg, Catalog, Translator};
pub use resolver::{resolve, LayoutMode, LayoutRef, Resolution};
pub use settle::{SettleQueue, SettleTask};
pub use tree::{Descendant, Element, ElementPath, ShadowRoot};
pub use violations::{ValidationOutcome, ViolationMapper, PROPERTY_PATH_PREFIX};

// Re-export shared types for convenience
pub use doclayout_common::{Constraint, Document, PathSegment, ValidationReport, Violation};
