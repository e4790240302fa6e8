//! # Focus Controller
//!
//! Picks the input that should receive keyboard focus once a layout has
//! rendered.
//!
//! ## Algorithm
//!
//! For an element hosting a shadow root:
//! 1. If the root already has an active element, stop (never steal focus).
//! 2. Collect the root's descendants that are not disabled, not
//!    `display: none`, and not `visibility: hidden`.
//! 3. The first candidate marked `autofocus` wins.
//! 4. Otherwise recurse into candidates hosting their own shadow root and
//!    take the first hit in document order.
//!
//! Enabled candidates without `autofocus` are never picked directly.

use tracing::{debug, trace};

use crate::tree::{Element, ElementPath};

/// Auto-focus target and where it sits below the scanned host
#[derive(Debug, Clone, PartialEq)]
pub struct Focusable<'a> {
    pub element: &'a Element,
    pub path: ElementPath,
}

/// Find the element auto-focus should target under `parent`
pub fn find_focusable(parent: &Element) -> Option<Focusable<'_>> {
    let inherited_hidden = parent.is_visibility_hidden(false);
    find_in(parent, inherited_hidden)
}

fn find_in(parent: &Element, inherited_hidden: bool) -> Option<Focusable<'_>> {
    let shadow = parent.shadow_root.as_ref()?;
    if shadow.has_focus() {
        trace!(element = %parent.id, "Subtree already holds focus");
        return None;
    }

    let candidates: Vec<_> = shadow
        .descendants(inherited_hidden)
        .into_iter()
        .filter(|d| !d.element.is_disabled() && !d.element.is_display_none() && !d.hidden)
        .collect();

    if let Some(found) = candidates.iter().find(|d| d.element.is_autofocus()) {
        return Some(Focusable {
            element: found.element,
            path: ElementPath::new(found.position.clone()),
        });
    }

    candidates
        .into_iter()
        .filter(|d| d.element.shadow_root.is_some())
        .find_map(|d| {
            let nested = find_in(d.element, false)?;
            Some(Focusable {
                element: nested.element,
                path: nested.path.within(d.position),
            })
        })
}

/// Focus the auto-focus target under `root`, if any. Returns its id.
pub fn apply_auto_focus(root: &mut Element) -> Option<String> {
    let (target, path) = match find_focusable(root) {
        Some(found) => (found.element.id.clone(), found.path),
        None => {
            debug!(element = %root.id, "No auto-focus target");
            return None;
        }
    };

    if root.focus_at(&path) {
        debug!(element = %root.id, target = %target, "Auto-focused element");
        Some(target)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(children: Vec<Element>) -> Element {
        Element::new("layout", "x-edit-layout").with_shadow(children)
    }

    #[test]
    fn test_picks_first_autofocus() {
        let root = layout(vec![
            Element::new("a", "input"),
            Element::new("b", "input").autofocus(),
            Element::new("c", "input").autofocus(),
        ]);
        assert_eq!(find_focusable(&root).map(|f| f.element.id.as_str()), Some("b"));
    }

    #[test]
    fn test_disabled_autofocus_and_plain_input_yield_nothing() {
        let root = layout(vec![
            Element::new("disabled", "input").autofocus().disabled(),
            Element::new("plain", "input"),
        ]);
        assert!(find_focusable(&root).is_none());
    }

    #[test]
    fn test_hidden_candidates_are_skipped() {
        let root = layout(vec![
            Element::new("gone", "input").autofocus().with_style("display", "none"),
            Element::new("group", "div")
                .with_style("visibility", "hidden")
                .with_child(Element::new("invisible", "input").autofocus()),
            Element::new("shown", "input").autofocus(),
        ]);
        assert_eq!(find_focusable(&root).map(|f| f.element.id.as_str()), Some("shown"));
    }

    #[test]
    fn test_recurses_into_nested_roots_in_order() {
        let root = layout(vec![
            Element::new("empty", "x-field").with_shadow(vec![Element::new("e", "input")]),
            Element::new("title", "x-field").with_shadow(vec![Element::new("title-input", "input").autofocus()]),
            Element::new("desc", "x-field").with_shadow(vec![Element::new("desc-input", "input").autofocus()]),
        ]);
        assert_eq!(find_focusable(&root).map(|f| f.element.id.as_str()), Some("title-input"));
    }

    #[test]
    fn test_top_level_autofocus_beats_nested() {
        let root = layout(vec![
            Element::new("field", "x-field").with_shadow(vec![Element::new("nested", "input").autofocus()]),
            Element::new("top", "input").autofocus(),
        ]);
        assert_eq!(find_focusable(&root).map(|f| f.element.id.as_str()), Some("top"));
    }

    #[test]
    fn test_does_not_steal_focus() {
        let mut root = layout(vec![Element::new("a", "input").autofocus()]);
        if let Some(shadow) = root.shadow_root.as_mut() {
            shadow.active_element = Some("other".to_string());
        }
        assert!(find_focusable(&root).is_none());
    }

    #[test]
    fn test_nested_root_with_focus_is_skipped() {
        let mut field = Element::new("field", "x-field").with_shadow(vec![Element::new("in", "input").autofocus()]);
        if let Some(shadow) = field.shadow_root.as_mut() {
            shadow.active_element = Some("in".to_string());
        }
        let root = layout(vec![field]);
        assert!(find_focusable(&root).is_none());
    }

    #[test]
    fn test_element_without_shadow_root() {
        let root = Element::new("plain", "div").with_child(Element::new("a", "input").autofocus());
        assert!(find_focusable(&root).is_none());
    }

    #[test]
    fn test_apply_auto_focus_marks_active() {
        let mut root = layout(vec![
            Element::new("field", "x-field").with_shadow(vec![Element::new("input", "input").autofocus()]),
        ]);

        assert_eq!(apply_auto_focus(&mut root).as_deref(), Some("input"));
        assert_eq!(
            root.shadow_root.as_ref().unwrap().active_element.as_deref(),
            Some("field")
        );

        // a second pass finds the subtree focused and does nothing
        assert!(apply_auto_focus(&mut root).is_none());
    }

    #[test]
    fn test_same_id_in_sibling_fields_focuses_the_picked_one() {
        let mut root = layout(vec![
            Element::new("first", "x-field").with_shadow(vec![Element::new("input", "input").autofocus().disabled()]),
            Element::new("second", "x-field").with_shadow(vec![Element::new("input", "input").autofocus()]),
        ]);

        let found = find_focusable(&root).unwrap();
        assert_eq!(found.element.id, "input");
        assert!(!found.element.is_disabled());
        assert_eq!(found.path, ElementPath::new(vec![0]).within(vec![1]));

        assert_eq!(apply_auto_focus(&mut root).as_deref(), Some("input"));

        let outer = root.shadow_root.as_ref().unwrap();
        assert_eq!(outer.active_element.as_deref(), Some("second"));
        let first = outer.children[0].shadow_root.as_ref().unwrap();
        let second = outer.children[1].shadow_root.as_ref().unwrap();
        assert_eq!(first.active_element, None);
        assert_eq!(second.active_element.as_deref(), Some("input"));
    }
}
