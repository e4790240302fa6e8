//! # Element Tree
//!
//! Snapshot of the stamped layout as reported by the rendering collaborator.
//! Elements may host a shadow root (a nested composition boundary); the
//! focus scan never crosses one implicitly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Rendered element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,

    #[serde(default = "default_tag")]
    pub tag: String,

    /// Attributes; boolean attributes (`disabled`, `autofocus`) are present or absent
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Computed style properties set on this element
    #[serde(default)]
    pub styles: HashMap<String, String>,

    /// Light-tree children
    #[serde(default)]
    pub children: Vec<Element>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_root: Option<ShadowRoot>,
}

fn default_tag() -> String {
    "div".to_string()
}

/// Nested composition boundary hosted by an element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShadowRoot {
    #[serde(default)]
    pub children: Vec<Element>,

    /// Id of the element holding focus inside this root, if any.
    /// For focus in a nested root this is the host on the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_element: Option<String>,
}

impl Element {
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
            children: Vec::new(),
            shadow_root: None,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_shadow(mut self, children: Vec<Element>) -> Self {
        self.shadow_root = Some(ShadowRoot {
            children,
            active_element: None,
        });
        self
    }

    pub fn disabled(self) -> Self {
        self.with_attr("disabled", "")
    }

    pub fn autofocus(self) -> Self {
        self.with_attr("autofocus", "")
    }

    pub fn is_disabled(&self) -> bool {
        self.attributes.contains_key("disabled")
    }

    pub fn is_autofocus(&self) -> bool {
        self.attributes.contains_key("autofocus")
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn is_display_none(&self) -> bool {
        self.style("display") == Some("none")
    }

    /// Effective visibility is hidden, given the parent's effective value.
    /// Visibility inherits unless the element sets its own.
    pub fn is_visibility_hidden(&self, inherited_hidden: bool) -> bool {
        match self.style("visibility") {
            Some(value) => value == "hidden",
            None => inherited_hidden,
        }
    }

    /// Find an element by id, searching light children and shadow roots
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        let shadow = self.shadow_root.iter().flat_map(|s| s.children.iter());
        shadow.chain(self.children.iter()).find_map(|child| child.find(id))
    }

    /// Element at `path`, resolved through this element's shadow root
    pub fn element_at(&self, path: &ElementPath) -> Option<&Element> {
        let mut current = self;
        for hop in &path.hops {
            current = current.shadow_root.as_ref()?.child_at(hop)?;
        }
        Some(current)
    }

    /// Move focus to the element at `path` inside this element's shadow
    /// root. Returns `false`, leaving focus untouched, when the path does
    /// not resolve.
    pub fn focus_at(&mut self, path: &ElementPath) -> bool {
        !path.hops.is_empty() && self.focus_hops(&path.hops)
    }

    fn focus_hops(&mut self, hops: &[Vec<usize>]) -> bool {
        let Some((hop, rest)) = hops.split_first() else {
            return true;
        };
        let Some(shadow) = self.shadow_root.as_mut() else {
            return false;
        };
        let Some(next) = shadow.child_at_mut(hop) else {
            return false;
        };
        if !next.focus_hops(rest) {
            return false;
        }

        let active = next.id.clone();
        shadow.active_element = Some(active);
        true
    }
}

/// Unique location of an element below a shadow host.
///
/// One hop per shadow root crossed; each hop is the index of a root child
/// followed by light-child indices down to the next host (or the target).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementPath {
    pub hops: Vec<Vec<usize>>,
}

impl ElementPath {
    pub fn new(position: Vec<usize>) -> Self {
        Self { hops: vec![position] }
    }

    /// This path as seen from one root further out
    pub fn within(mut self, position: Vec<usize>) -> Self {
        self.hops.insert(0, position);
        self
    }
}

/// Element of a shadow root's tree, as seen by the focus scan
#[derive(Debug, Clone, PartialEq)]
pub struct Descendant<'a> {
    pub element: &'a Element,

    /// Child indices from the shadow root down to the element
    pub position: Vec<usize>,

    /// Effective visibility is hidden
    pub hidden: bool,
}

impl ShadowRoot {
    pub fn has_focus(&self) -> bool {
        self.active_element.is_some()
    }

    /// All elements of this root's tree in document order, with their
    /// position and effective visibility. Does not enter nested shadow
    /// roots.
    pub fn descendants(&self, inherited_hidden: bool) -> Vec<Descendant<'_>> {
        let mut out = Vec::new();
        for (index, child) in self.children.iter().enumerate() {
            collect_descendants(child, vec![index], inherited_hidden, &mut out);
        }
        out
    }

    fn child_at(&self, position: &[usize]) -> Option<&Element> {
        let (first, rest) = position.split_first()?;
        let mut current = self.children.get(*first)?;
        for index in rest {
            current = current.children.get(*index)?;
        }
        Some(current)
    }

    fn child_at_mut(&mut self, position: &[usize]) -> Option<&mut Element> {
        let (first, rest) = position.split_first()?;
        let mut current = self.children.get_mut(*first)?;
        for index in rest {
            current = current.children.get_mut(*index)?;
        }
        Some(current)
    }
}

fn collect_descendants<'a>(
    element: &'a Element,
    position: Vec<usize>,
    inherited_hidden: bool,
    out: &mut Vec<Descendant<'a>>,
) {
    let hidden = element.is_visibility_hidden(inherited_hidden);
    out.push(Descendant {
        element,
        position: position.clone(),
        hidden,
    });
    for (index, child) in element.children.iter().enumerate() {
        let mut child_position = position.clone();
        child_position.push(index);
        collect_descendants(child, child_position, hidden, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_visibility_inherits() {
        let root = ShadowRoot {
            children: vec![Element::new("group", "div")
                .with_style("visibility", "hidden")
                .with_child(Element::new("a", "input"))
                .with_child(Element::new("b", "input").with_style("visibility", "visible"))],
            active_element: None,
        };

        let seen: Vec<(&str, bool)> = root
            .descendants(false)
            .into_iter()
            .map(|d| (d.element.id.as_str(), d.hidden))
            .collect();
        assert_eq!(seen, vec![("group", true), ("a", true), ("b", false)]);
    }

    #[test]
    fn test_descendants_stop_at_nested_roots() {
        let root = ShadowRoot {
            children: vec![Element::new("host", "x-field").with_shadow(vec![Element::new("inner", "input")])],
            active_element: None,
        };
        let ids: Vec<&str> = root.descendants(false).into_iter().map(|d| d.element.id.as_str()).collect();
        assert_eq!(ids, vec!["host"]);
    }

    #[test]
    fn test_descendant_positions() {
        let root = ShadowRoot {
            children: vec![
                Element::new("a", "input"),
                Element::new("row", "div").with_child(Element::new("b", "input")),
            ],
            active_element: None,
        };
        let positions: Vec<(&str, Vec<usize>)> = root
            .descendants(false)
            .into_iter()
            .map(|d| (d.element.id.as_str(), d.position))
            .collect();
        assert_eq!(
            positions,
            vec![("a", vec![0]), ("row", vec![1]), ("b", vec![1, 0])]
        );
    }

    #[test]
    fn test_focus_retargets_enclosing_roots() {
        let mut layout = Element::new("layout", "x-layout").with_shadow(vec![Element::new("row", "div")
            .with_child(Element::new("field", "x-field").with_shadow(vec![Element::new("input", "input")]))]);

        let path = ElementPath::new(vec![0]).within(vec![0, 0]);
        assert_eq!(layout.element_at(&path).map(|e| e.id.as_str()), Some("input"));
        assert!(layout.focus_at(&path));

        let outer = layout.shadow_root.as_ref().unwrap();
        assert_eq!(outer.active_element.as_deref(), Some("field"));
        let field = layout.find("field").unwrap();
        assert_eq!(
            field.shadow_root.as_ref().unwrap().active_element.as_deref(),
            Some("input")
        );
    }

    #[test]
    fn test_focus_follows_path_not_id() {
        let mut layout = Element::new("layout", "x-layout").with_shadow(vec![
            Element::new("first", "x-field").with_shadow(vec![Element::new("input", "input")]),
            Element::new("second", "x-field").with_shadow(vec![Element::new("input", "input")]),
        ]);

        assert!(layout.focus_at(&ElementPath::new(vec![0]).within(vec![1])));

        let outer = layout.shadow_root.as_ref().unwrap();
        assert_eq!(outer.active_element.as_deref(), Some("second"));
        let first = &outer.children[0];
        assert!(!first.shadow_root.as_ref().unwrap().has_focus());
    }

    #[test]
    fn test_focus_unresolved_path() {
        let mut layout = Element::new("layout", "x-layout").with_shadow(vec![
            Element::new("field", "x-field").with_shadow(vec![Element::new("a", "input")]),
        ]);
        assert!(!layout.focus_at(&ElementPath::new(vec![3]).within(vec![0])));
        assert!(!layout.focus_at(&ElementPath::default()));

        let outer = layout.shadow_root.as_ref().unwrap();
        assert!(!outer.has_focus());
        assert!(!outer.children[0].shadow_root.as_ref().unwrap().has_focus());
    }

    #[test]
    fn test_deserialize_snapshot() {
        let element: Element = serde_json::from_value(json!({
            "id": "layout",
            "shadow_root": {
                "children": [
                    { "id": "title", "tag": "input", "attributes": { "autofocus": "" } }
                ]
            }
        }))
        .unwrap();

        let title = element.find("title").unwrap();
        assert!(title.is_autofocus());
        assert!(!title.is_disabled());
        assert_eq!(element.tag, "div");
    }
}
