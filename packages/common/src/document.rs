//! # Document
//!
//! The typed document handed to a layout by the host page. Documents are
//! owned by the caller; the layout only writes to them when the rendering
//! collaborator reports an in-place edit.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CommonError;
use crate::result::CommonResult;

/// A typed document with a stable identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identity across edits
    pub uid: String,

    /// Document type (e.g. `File`, `Note`), selects the layout family
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Property values keyed by property name (`dc:title`, ...)
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Document {
    pub fn new(uid: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            doc_type: doc_type.into(),
            properties: Map::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Same identity (uid), regardless of property values
    pub fn same_identity(&self, other: &Document) -> bool {
        self.uid == other.uid
    }

    /// Same type, compared exactly as sent
    pub fn same_type(&self, other: &Document) -> bool {
        self.doc_type == other.doc_type
    }

    /// Read a value by dotted path relative to the document
    /// (`properties.dc:title`, `properties.file:content.name`)
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        match segments.next()? {
            "properties" => {}
            _ => return None,
        }

        let first = segments.next()?;
        let mut current = self.properties.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Write a value by dotted path relative to the document.
    ///
    /// Intermediate objects must already exist; only the last segment may
    /// be created.
    pub fn set_path(&mut self, path: &str, value: Value) -> CommonResult<()> {
        let invalid = || CommonError::InvalidPath(path.to_string());

        let rest = path.strip_prefix("properties.").ok_or_else(invalid)?;
        let mut segments: Vec<&str> = rest.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid());
        }

        let last = segments.pop().ok_or_else(invalid)?;
        let mut target = &mut self.properties;
        for segment in segments {
            target = target
                .get_mut(segment)
                .and_then(Value::as_object_mut)
                .ok_or_else(invalid)?;
        }
        target.insert(last.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_wire_document() {
        let doc: Document = serde_json::from_value(json!({
            "uid": "abc-1",
            "type": "File",
            "properties": { "dc:title": "Report" }
        }))
        .unwrap();

        assert_eq!(doc.uid, "abc-1");
        assert_eq!(doc.doc_type, "File");
        assert_eq!(doc.properties["dc:title"], json!("Report"));
    }

    #[test]
    fn test_properties_default_to_empty() {
        let doc: Document = serde_json::from_value(json!({ "uid": "a", "type": "Note" })).unwrap();
        assert!(doc.properties.is_empty());
    }

    #[test]
    fn test_set_path_top_level() {
        let mut doc = Document::new("a", "Note").with_property("dc:title", "old");
        doc.set_path("properties.dc:title", json!("new")).unwrap();
        assert_eq!(doc.get_path("properties.dc:title"), Some(&json!("new")));
    }

    #[test]
    fn test_set_path_nested() {
        let mut doc = Document::new("a", "File").with_property("file:content", json!({ "name": "a.txt" }));
        doc.set_path("properties.file:content.name", json!("b.txt")).unwrap();
        assert_eq!(doc.get_path("properties.file:content.name"), Some(&json!("b.txt")));
    }

    #[test]
    fn test_set_path_rejects_foreign_roots() {
        let mut doc = Document::new("a", "File");
        assert!(matches!(
            doc.set_path("uid", json!("b")),
            Err(CommonError::InvalidPath(_))
        ));
        assert!(doc.set_path("properties.missing.child", json!(1)).is_err());
        assert!(doc.set_path("properties..x", json!(1)).is_err());
        assert_eq!(doc.uid, "a");
    }
}
