//! # Validation Report
//!
//! Wire shape of the report returned by the remote validation service.
//! Field names follow the service (`messageKey`, `invalid_value`,
//! `field_name`); anything else the service sends is ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ordered list of violations for one validation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(default)]
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A single schema-validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Field path the violation is scoped to, absent for document-level violations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    /// Localization key of the violation message
    #[serde(rename = "messageKey")]
    pub message_key: String,

    /// The offending value, as sent
    #[serde(default)]
    pub invalid_value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
}

impl Violation {
    /// Document-level violation with no field path
    pub fn global(message_key: impl Into<String>) -> Self {
        Self {
            path: None,
            message_key: message_key.into(),
            invalid_value: Value::Null,
            constraint: None,
        }
    }

    /// Violation scoped to a single field
    pub fn on_field(
        field_name: impl Into<String>,
        message_key: impl Into<String>,
        invalid_value: impl Into<Value>,
    ) -> Self {
        Self {
            path: Some(vec![PathSegment::new(field_name)]),
            message_key: message_key.into(),
            invalid_value: invalid_value.into(),
            constraint: None,
        }
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Name of the violated constraint, if one is present and named
    pub fn constraint_name(&self) -> Option<&str> {
        self.constraint.as_ref().and_then(Constraint::name)
    }
}

/// One step of a violation path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    pub field_name: String,
}

impl PathSegment {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

/// The schema constraint a violation refers to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Positional parameters. The service sends either a list or an object;
    /// objects contribute their values in the order they were sent.
    #[serde(default, deserialize_with = "positional_parameters")]
    pub parameters: Vec<Value>,
}

impl Constraint {
    pub fn new(name: impl Into<String>, parameters: Vec<Value>) -> Self {
        Self {
            name: Some(name.into()),
            parameters,
        }
    }

    /// Constraint name, treating an empty name as absent
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

fn positional_parameters<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Parameters {
        List(Vec<Value>),
        Named(serde_json::Map<String, Value>),
        Missing(()),
    }

    Ok(match Parameters::deserialize(deserializer)? {
        Parameters::List(values) => values,
        Parameters::Named(map) => map.into_iter().map(|(_, v)| v).collect(),
        Parameters::Missing(()) => Vec::new(),
    })
}
