//! # Localization
//!
//! Message lookup used for violation and layout messages. A miss never
//! fails: the key itself is returned, and callers rely on that to detect
//! missing translations.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::LayoutError;

/// Resolves a message key with positional arguments
pub trait Translator {
    /// Translate `key`, returning `key` unchanged when it is unknown
    fn translate(&self, key: &str, args: &[Value]) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, &[Value]) -> String,
{
    fn translate(&self, key: &str, args: &[Value]) -> String {
        self(key, args)
    }
}

/// Key → template catalog with `{0}`, `{1}`, ... placeholders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, args: &[Value]) -> String {
        match self.messages.get(key) {
            Some(template) => format_template(template, args),
            None => key.to_string(),
        }
    }
}

/// Substitute `{n}` placeholders. Unknown indexes are left as written.
pub fn format_template(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((render_arg(arg), close))
        });

        match substituted {
            Some((text, close)) => {
                out.push_str(&text);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Render an argument the way it reads in a message
pub fn render_arg(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
