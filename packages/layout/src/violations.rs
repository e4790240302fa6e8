//! # Violation Mapper
//!
//! Turns a validation report into display messages and flags the widgets
//! responsible for each violation.
//!
//! ## Ordering
//!
//! Violations are processed last-to-first: the last violation of the report
//! produces the first message. Existing displays depend on this order.
//!
//! ## Message selection per path segment
//!
//! ```text
//! no bound widget        → i18n(messageKey, invalid_value, field)
//! bound, translated      → i18n(messageKey, invalid_value, field)       + flag widgets
//! bound, miss + named    → i18n(<prefix>.<constraint>, invalid_value,
//!   constraint                  field, params...)                       + flag widgets
//! ```
//!
//! A violation without a path resolves `messageKey` with no arguments.

use doclayout_common::{ValidationReport, Violation};
use serde_json::Value;
use tracing::{debug, trace};

use crate::bindings::{WidgetBindings, WidgetId};
use crate::i18n::Translator;

/// Prefix under which document properties are bound
pub const PROPERTY_PATH_PREFIX: &str = "document.properties";

/// What a `report_validation` call changed outside the mapper
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Widgets flagged invalid, in flag order (may repeat across segments)
    pub flagged: Vec<WidgetId>,

    /// The error display should be scrolled into view and focused
    pub reveal_errors: bool,
}

#[derive(Debug)]
pub struct ViolationMapper {
    constraint_key_prefix: String,
    messages: Vec<String>,
    invalid: bool,
}

impl ViolationMapper {
    pub fn new(constraint_key_prefix: impl Into<String>) -> Self {
        Self {
            constraint_key_prefix: constraint_key_prefix.into(),
            messages: Vec::new(),
            invalid: false,
        }
    }

    /// Clear displayed messages. The form-level flag is left alone.
    pub fn reset(&mut self) {
        self.messages.clear();
    }

    pub fn error_messages(&self) -> &[String] {
        &self.messages
    }

    /// Form-level invalid flag. Only ever set, never cleared here.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn report_validation<B, T>(
        &mut self,
        report: &ValidationReport,
        bindings: &mut B,
        i18n: &T,
    ) -> ValidationOutcome
    where
        B: WidgetBindings + ?Sized,
        T: Translator + ?Sized,
    {
        self.reset();
        let mut outcome = ValidationOutcome::default();

        for violation in report.violations.iter().rev() {
            match &violation.path {
                Some(path) => {
                    self.invalid = true;
                    for segment in path {
                        self.map_field(violation, &segment.field_name, bindings, i18n, &mut outcome);
                    }
                }
                None => {
                    trace!(key = %violation.message_key, "Mapping document-level violation");
                    self.messages.push(i18n.translate(&violation.message_key, &[]));
                }
            }
        }

        outcome.reveal_errors = !self.messages.is_empty();
        debug!(
            violations = report.violations.len(),
            messages = self.messages.len(),
            flagged = outcome.flagged.len(),
            "Validation report mapped"
        );
        outcome
    }

    fn map_field<B, T>(
        &mut self,
        violation: &Violation,
        field_name: &str,
        bindings: &mut B,
        i18n: &T,
        outcome: &mut ValidationOutcome,
    ) where
        B: WidgetBindings + ?Sized,
        T: Translator + ?Sized,
    {
        let field_args = [violation.invalid_value.clone(), Value::String(field_name.to_string())];
        let message = i18n.translate(&violation.message_key, &field_args);

        let widgets = bindings.bound_widgets(&format!("{}.{}", PROPERTY_PATH_PREFIX, field_name));
        if widgets.is_empty() {
            debug!(field = %field_name, "No widget bound for violation");
            self.messages.push(message);
            return;
        }

        let message = match violation.constraint_name() {
            Some(constraint) if message == violation.message_key => {
                debug!(field = %field_name, constraint = %constraint, "Falling back to constraint message");
                self.constraint_message(violation, constraint, field_args, i18n)
            }
            _ => message,
        };
        self.messages.push(message);

        debug!(field = %field_name, widgets = widgets.len(), "Flagging bound widgets");
        for widget in widgets {
            bindings.mark_invalid(&widget);
            outcome.flagged.push(widget);
        }
    }

    fn constraint_message<T>(
        &self,
        violation: &Violation,
        constraint: &str,
        field_args: [Value; 2],
        i18n: &T,
    ) -> String
    where
        T: Translator + ?Sized,
    {
        let key = format!("{}.{}", self.constraint_key_prefix, constraint);
        let parameters = violation
            .constraint
            .iter()
            .flat_map(|c| c.parameters.iter().cloned());
        let args: Vec<Value> = field_args.into_iter().chain(parameters).collect();
        i18n.translate(&key, &args)
    }
}
