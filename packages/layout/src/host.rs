//! # Document Layout Host
//!
//! Composes the resolver, binder, violation mapper and focus controller for
//! one document view. The host page drives it with explicit calls, one per
//! change:
//!
//! ```text
//! set_document / set_mode → resolve layout → bind model → (renderer stamps)
//! element_changed         → rebind model, queue settle tasks
//! render_settled          → document-layout-changed, auto-focus
//! report_validation       → messages + invalid widgets
//! ```
//!
//! Outputs for collaborators are queued as [`LayoutEvent`]s and drained
//! with [`DocumentLayout::take_events`].

use doclayout_common::{CommonError, Document, ValidationReport};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::binder::{BindOutcome, Model, ModelBinder};
use crate::bindings::WidgetBindings;
use crate::events::LayoutEvent;
use crate::focus;
use crate::i18n::Translator;
use crate::resolver::{resolve, LayoutMode, LayoutRef};
use crate::settle::{SettleQueue, SettleTask};
use crate::tree::Element;
use crate::violations::{ValidationOutcome, ViolationMapper};
use crate::{LayoutConfig, LayoutError};

/// Document as set by the host page
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DocumentState {
    /// A document to display
    Present(Document),
    /// Cancel sentinel: unbind the view from any document
    Cancelled,
    /// No document; nothing is recomputed
    #[default]
    Cleared,
}

impl DocumentState {
    pub fn document(&self) -> Option<&Document> {
        match self {
            DocumentState::Present(document) => Some(document),
            _ => None,
        }
    }

    fn document_mut(&mut self) -> Option<&mut Document> {
        match self {
            DocumentState::Present(document) => Some(document),
            _ => None,
        }
    }
}

impl From<Document> for DocumentState {
    fn from(document: Document) -> Self {
        DocumentState::Present(document)
    }
}

/// Layout host for a single document view
#[derive(Debug)]
pub struct DocumentLayout {
    config: LayoutConfig,
    mode: LayoutMode,
    document: DocumentState,
    previous: Option<Document>,
    layout_ref: Option<LayoutRef>,
    href: Option<String>,
    binder: ModelBinder,
    mapper: ViolationMapper,
    element: Option<Element>,
    settle: SettleQueue,
    events: Vec<LayoutEvent>,
}

impl DocumentLayout {
    pub fn new(config: LayoutConfig) -> Self {
        let mode = LayoutMode::new(config.default_mode.clone());
        let mapper = ViolationMapper::new(config.constraint_key_prefix.clone());

        Self {
            config,
            mode,
            document: DocumentState::Cleared,
            previous: None,
            layout_ref: None,
            href: None,
            binder: ModelBinder::new(),
            mapper,
            element: None,
            settle: SettleQueue::new(),
            events: Vec::new(),
        }
    }

    /// The bound document changed
    #[instrument(skip_all, fields(mode = %self.mode))]
    pub fn set_document(&mut self, document: impl Into<DocumentState>) {
        self.document = document.into();
        self.load_layout();
    }

    /// The requested mode changed
    #[instrument(skip_all, fields(mode = %mode))]
    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
        self.load_layout();
    }

    fn load_layout(&mut self) {
        self.mapper.reset();

        match self.document.clone() {
            DocumentState::Present(document) => {
                let resolution = resolve(Some(&document), &self.mode, self.previous.as_ref());

                if resolution.forces_reload() {
                    debug!(uid = %document.uid, "Forcing layout restamp");
                    self.layout_ref = None;
                    self.set_href(None);
                }

                match self.binder.bind(Some(&document), self.previous.as_ref()) {
                    BindOutcome::Replaced => self.emit_model_changed(),
                    BindOutcome::Deferred | BindOutcome::Unbound => {}
                }

                if let Some(layout_ref) = resolution.layout_ref {
                    let href = layout_ref.href(&self.config);
                    info!(layout = %layout_ref, href = %href, "Resolved layout");
                    self.layout_ref = Some(layout_ref);
                    self.set_href(Some(href));
                }

                self.previous = Some(document);
            }
            DocumentState::Cancelled => {
                debug!("Cancel sentinel, unbinding model");
                self.binder.bind(None, self.previous.as_ref());
                self.emit_model_changed();
                self.previous = None;
            }
            DocumentState::Cleared => {
                self.previous = None;
            }
        }
    }

    fn set_href(&mut self, href: Option<String>) {
        if self.href != href {
            self.href = href.clone();
            self.events.push(LayoutEvent::LayoutRequested { href });
        }
    }

    fn emit_model_changed(&mut self) {
        let document_uid = self.binder.model().document.as_ref().map(|d| d.uid.clone());
        self.events.push(LayoutEvent::ModelChanged { document_uid });
    }

    /// The renderer stamped a new layout element (or none)
    #[instrument(skip_all)]
    pub fn element_changed(&mut self, element: Option<Element>) {
        self.binder.layout_ready(self.document.document());
        self.emit_model_changed();

        self.element = element;
        self.settle.schedule(SettleTask::AnnounceLayout);
        self.settle.schedule(SettleTask::AutoFocus);
    }

    /// The renderer finished a render; run deferred work
    #[instrument(skip_all, fields(tasks = self.settle.len()))]
    pub fn render_settled(&mut self) {
        for task in self.settle.drain() {
            match task {
                SettleTask::AnnounceLayout => {
                    let element = self.element.as_ref().map(|e| e.id.clone());
                    self.events.push(LayoutEvent::DocumentLayoutChanged {
                        element,
                        layout: self.mode.to_string(),
                    });
                }
                SettleTask::AutoFocus => {
                    self.apply_auto_focus();
                }
            }
        }
    }

    /// Focus the first auto-focus input of the stamped element
    pub fn apply_auto_focus(&mut self) -> Option<String> {
        let root = self.element.as_mut()?;
        let target = focus::apply_auto_focus(root)?;
        self.events.push(LayoutEvent::Focused {
            element: target.clone(),
        });
        Some(target)
    }

    /// Forward an in-place edit reported by the renderer.
    ///
    /// `path` is relative to the host (`document.properties.dc:title`).
    #[instrument(skip(self, value))]
    pub fn forward_edit(&mut self, path: &str, value: Value) -> Result<(), LayoutError> {
        let relative = path
            .strip_prefix("document.")
            .ok_or_else(|| LayoutError::InvalidPath(path.to_string()))?;

        let Some(document) = self.document.document_mut() else {
            debug!("No document bound, ignoring edit");
            return Ok(());
        };

        document
            .set_path(relative, value.clone())
            .map_err(|CommonError::InvalidPath(_)| LayoutError::InvalidPath(path.to_string()))?;

        if let Some(bound) = self.binder.document_mut() {
            if bound.same_identity(document) {
                bound.set_path(relative, value.clone())?;
            }
        }

        self.events.push(LayoutEvent::PathChanged {
            path: path.to_string(),
            value,
        });
        Ok(())
    }

    /// Map a validation report onto messages and bound widgets
    #[instrument(skip_all, fields(violations = report.violations.len()))]
    pub fn report_validation<B, T>(&mut self, report: &ValidationReport, bindings: &mut B, i18n: &T) -> ValidationOutcome
    where
        B: WidgetBindings + ?Sized,
        T: Translator + ?Sized,
    {
        let outcome = self.mapper.report_validation(report, bindings, i18n);
        if outcome.reveal_errors {
            self.events.push(LayoutEvent::ErrorsRevealed {
                count: self.mapper.error_messages().len(),
            });
        }
        outcome
    }

    /// Inline message for a missing layout resource
    pub fn layout_not_found_message<T>(&self, i18n: &T) -> Option<String>
    where
        T: Translator + ?Sized,
    {
        let document = self.document.document()?;
        Some(i18n.translate(
            &self.config.layout_not_found_key,
            &[Value::String(document.doc_type.clone())],
        ))
    }

    /// Drain queued notifications
    pub fn take_events(&mut self) -> Vec<LayoutEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn mode(&self) -> &LayoutMode {
        &self.mode
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    pub fn model(&self) -> &Model {
        self.binder.model()
    }

    pub fn is_model_stale(&self) -> bool {
        self.binder.is_stale()
    }

    pub fn layout_ref(&self) -> Option<&LayoutRef> {
        self.layout_ref.as_ref()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    pub fn error_messages(&self) -> &[String] {
        self.mapper.error_messages()
    }

    pub fn is_invalid(&self) -> bool {
        self.mapper.is_invalid()
    }

    pub fn pending_settle_tasks(&self) -> usize {
        self.settle.len()
    }
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
