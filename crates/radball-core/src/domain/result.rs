//! Validation result types.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::error::ValidationError;
use crate::domain::rules::Rule;
use crate::domain::value_objects::{RuleKind, Severity};

/// Separator used when messages are flattened into one line.
pub const MESSAGE_SEPARATOR: &str = "; ";

/// A single field-level rule violation.
///
/// `rule` and `kind` are set when the violation came from the built-in rule
/// table and are `None` for free-form messages added by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<RuleKind>,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
            kind: None,
        }
    }

    /// A violation of a registered rule, reported under the rule's field.
    pub fn from_rule(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field: rule.field().to_owned(),
            message: message.into(),
            rule: Some(rule),
            kind: Some(rule.kind()),
        }
    }
}

/// Aggregated result of checking one input record.
///
/// Messages are grouped by field. Field order is first-insertion order and
/// messages keep their insertion order within a field, so flattening is
/// deterministic. Nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: IndexMap<String, Vec<Violation>>,
    warnings: IndexMap<String, Vec<Violation>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Recording ─────────────────────────────────────────────────────────────

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add_violation(Severity::Error, Violation::new(field, message));
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add_violation(Severity::Warning, Violation::new(field, message));
    }

    /// Append a violation under its own field.
    pub fn add_violation(&mut self, severity: Severity, violation: Violation) {
        let bucket = match severity {
            Severity::Error => &mut self.errors,
            Severity::Warning => &mut self.warnings,
        };
        bucket
            .entry(violation.field.clone())
            .or_default()
            .push(violation);
    }

    /// Fold a nested record's result into this one.
    ///
    /// Every field of `other` is re-keyed as `"<prefix>.<field>"`. Errors stay
    /// errors and warnings stay warnings.
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationResult) {
        for (severity, bucket) in [
            (Severity::Error, other.errors),
            (Severity::Warning, other.warnings),
        ] {
            for violation in bucket.into_values().flatten() {
                let field = format!("{prefix}.{}", violation.field);
                self.add_violation(severity, Violation { field, ..violation });
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn errors(&self) -> &IndexMap<String, Vec<Violation>> {
        &self.errors
    }

    pub fn warnings(&self) -> &IndexMap<String, Vec<Violation>> {
        &self.warnings
    }

    /// Error messages recorded for one field, in insertion order.
    pub fn field_errors(&self, field: &str) -> Vec<&str> {
        self.errors
            .get(field)
            .map(|v| v.iter().map(|x| x.message.as_str()).collect())
            .unwrap_or_default()
    }

    /// All error violations, field order first then insertion order.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.errors.values().flatten()
    }

    pub fn warning_violations(&self) -> impl Iterator<Item = &Violation> {
        self.warnings.values().flatten()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.violations().map(|v| v.message.as_str()).collect()
    }

    pub fn warning_messages(&self) -> Vec<&str> {
        self.warning_violations()
            .map(|v| v.message.as_str())
            .collect()
    }

    pub fn error_messages_string(&self) -> String {
        self.error_messages().join(MESSAGE_SEPARATOR)
    }

    pub fn warning_messages_string(&self) -> String {
        self.warning_messages().join(MESSAGE_SEPARATOR)
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.values().map(Vec::len).sum()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// `true` when no error was recorded. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Whether any error came from `rule`.
    pub fn has_rule(&self, rule: Rule) -> bool {
        self.violations().any(|v| v.rule == Some(rule))
    }

    /// Whether `field` has an error of the given kind.
    pub fn has_kind(&self, field: &str, kind: RuleKind) -> bool {
        self.errors
            .get(field)
            .is_some_and(|v| v.iter().any(|x| x.kind == Some(kind)))
    }

    // ── Enforcement ───────────────────────────────────────────────────────────

    /// Fail with every error message joined by `"; "` if any error exists.
    pub fn raise_if_invalid(&self) -> Result<(), ValidationError> {
        if self.is_valid() {
            return Ok(());
        }
        Err(ValidationError::new(
            self.error_messages_string(),
            self.error_count(),
        ))
    }
}
