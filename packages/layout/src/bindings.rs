//! # Bound Widgets
//!
//! The rendering collaborator knows which input widgets are bound to which
//! data path. The violation mapper only needs to ask that question and flag
//! the answers, so it goes through [`WidgetBindings`] rather than walking
//! the rendered tree.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub type WidgetId = String;

/// Narrow view of the collaborator's path → widget mapping
pub trait WidgetBindings {
    /// Widgets bound to `property_path` (e.g. `document.properties.dc:title`),
    /// in binding order. Empty when nothing is bound.
    fn bound_widgets(&self, property_path: &str) -> Vec<WidgetId>;

    /// Flag a widget as holding an invalid value
    fn mark_invalid(&mut self, widget: &str);
}

/// In-memory binding table, as reported by a rendering collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindingTable {
    /// Property path → widgets bound to it
    #[serde(default)]
    bindings: BTreeMap<String, Vec<WidgetId>>,

    /// Widgets currently flagged invalid
    #[serde(default)]
    invalid: BTreeSet<WidgetId>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binding(mut self, property_path: impl Into<String>, widget: impl Into<WidgetId>) -> Self {
        self.bind(property_path, widget);
        self
    }

    pub fn bind(&mut self, property_path: impl Into<String>, widget: impl Into<WidgetId>) {
        let widgets = self.bindings.entry(property_path.into()).or_default();
        let widget = widget.into();
        if !widgets.contains(&widget) {
            widgets.push(widget);
        }
    }

    pub fn is_invalid(&self, widget: &str) -> bool {
        self.invalid.contains(widget)
    }

    pub fn invalid_widgets(&self) -> impl Iterator<Item = &str> {
        self.invalid.iter().map(String::as_str)
    }
}

impl WidgetBindings for BindingTable {
    fn bound_widgets(&self, property_path: &str) -> Vec<WidgetId> {
        self.bindings.get(property_path).cloned().unwrap_or_default()
    }

    fn mark_invalid(&mut self, widget: &str) {
        self.invalid.insert(widget.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_and_flag() {
        let mut table = BindingTable::new()
            .with_binding("document.properties.dc:title", "title-input")
            .with_binding("document.properties.dc:title", "title-summary");

        assert_eq!(
            table.bound_widgets("document.properties.dc:title"),
            vec!["title-input", "title-summary"]
        );
        assert!(table.bound_widgets("document.properties.dc:description").is_empty());

        table.mark_invalid("title-input");
        assert!(table.is_invalid("title-input"));
        assert!(!table.is_invalid("title-summary"));
        assert_eq!(table.invalid_widgets().collect::<Vec<_>>(), vec!["title-input"]);
    }

    #[test]
    fn test_duplicate_binding_is_ignored() {
        let table = BindingTable::new()
            .with_binding("document.properties.dc:title", "title-input")
            .with_binding("document.properties.dc:title", "title-input");
        assert_eq!(table.bound_widgets("document.properties.dc:title").len(), 1);
    }

    #[test]
    fn test_deserialize_table() {
        let table: BindingTable = serde_json::from_value(json!({
            "bindings": { "document.properties.dc:title": ["title-input"] }
        }))
        .unwrap();
        assert_eq!(table.bound_widgets("document.properties.dc:title"), vec!["title-input"]);
    }
}
