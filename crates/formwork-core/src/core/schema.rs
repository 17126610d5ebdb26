// crates/formwork-core/src/core/schema.rs
// ============================================================================
// Module: Field and Group Schema
// Description: Static descriptors for configurable fields and field groups.
// Purpose: Deserialize externally supplied schema documents and resolve
//          visibility and mutual-exclusion relations against a config map.
// Dependencies: crate::core::value, crate::runtime::{compute, condition}, serde
// ============================================================================

//! ## Overview
//! Schema types arrive as JSON from an external schema source and are
//! immutable once loaded. The engine interprets only the rule-bearing
//! members (`validation`, `show_if`/`hide_if`, `compute`,
//! `exclusive_with`); presentation metadata is carried for the form layer
//! untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::value::Config;
use crate::core::value::Value;
use crate::runtime::compute::compute_value;
use crate::runtime::condition::evaluate_condition;
use crate::runtime::validate::validate_field;

// ============================================================================
// SECTION: Field Kind
// ============================================================================

/// Input widget kind for a configurable field.
///
/// Only [`FieldKind::Output`] changes engine behavior (it gates derived
/// value computation); the remaining kinds are carried for the form layer.
///
/// # Invariants
/// - Variants are stable for serialization and schema matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Masked text input.
    Password,
    /// Numeric input.
    Number,
    /// Bounded numeric slider.
    #[serde(alias = "range")]
    Slider,
    /// Boolean toggle.
    #[serde(alias = "checkbox")]
    Boolean,
    /// Single-choice dropdown.
    Select,
    /// Multi-choice dropdown.
    MultiSelect,
    /// CIDR-notation network block input.
    Cidr,
    /// File upload reference.
    File,
    /// Ordered list of text entries.
    List,
    /// Read-only informational text.
    Static,
    /// Read-only derived value; populated by the compute engine.
    Output,
}

// ============================================================================
// SECTION: Field Specification
// ============================================================================

/// Static descriptor for one configurable field.
///
/// # Invariants
/// - `show_if` and `hide_if` are mutually exclusive; when both are present
///   `show_if` wins, and when neither is present the field is always
///   visible.
/// - `validation` preserves schema order; rules run first to last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name; the key used in the configuration map.
    pub name: String,
    /// Input widget kind.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Display label for the form layer.
    #[serde(default)]
    pub label: Option<String>,
    /// Longer description for the form layer.
    #[serde(default)]
    pub description: Option<String>,
    /// Help text for the form layer.
    #[serde(default)]
    pub help: Option<String>,
    /// Placeholder text for the form layer.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Static options for select-like kinds.
    #[serde(default)]
    pub options: Vec<String>,
    /// Initial value applied by the form layer.
    #[serde(default)]
    pub default_value: Value,
    /// Ordered validation rule strings (`name[:param]`).
    #[serde(default)]
    pub validation: Vec<String>,
    /// Condition expression; the field is visible when it holds.
    #[serde(default)]
    pub show_if: Option<String>,
    /// Condition expression; the field is visible when it does not hold.
    #[serde(default)]
    pub hide_if: Option<String>,
    /// Derived-value expression for output fields.
    #[serde(default)]
    pub compute: Option<String>,
    /// Name of a boolean field that must be cleared when this one is set.
    #[serde(default)]
    pub exclusive_with: Option<String>,
}

impl FieldSpec {
    /// Returns true when the field should be shown for the given config.
    #[must_use]
    pub fn is_visible(&self, config: &Config) -> bool {
        if let Some(expression) = &self.show_if {
            return evaluate_condition(expression, config);
        }
        if let Some(expression) = &self.hide_if {
            return !evaluate_condition(expression, config);
        }
        true
    }

    /// Returns true when the field's value is derived, never edited.
    #[must_use]
    pub fn is_output(&self) -> bool {
        self.kind == FieldKind::Output
    }

    /// Computes the derived value for an output field.
    ///
    /// Returns `None` for non-output fields and output fields without a
    /// compute expression; the computation itself is fail-soft and yields
    /// an empty string on any internal failure.
    #[must_use]
    pub fn computed_value(&self, config: &Config) -> Option<String> {
        if !self.is_output() {
            return None;
        }
        self.compute.as_deref().map(|expression| compute_value(expression, config))
    }

    /// Runs the field's validation chain against a candidate value.
    ///
    /// Returns the first failing rule's message, or `None` when every rule
    /// passes.
    #[must_use]
    pub fn validate(&self, value: &Value, config: &Config) -> Option<String> {
        validate_field(&self.validation, value, config)
    }

    /// Returns the field that must be cleared when this one is being set.
    ///
    /// Only boolean-kinded fields participate in mutual exclusion, and only
    /// when the incoming value is `true`. The caller owns the actual
    /// clearing; the engine never writes the config.
    #[must_use]
    pub fn exclusive_partner(&self, new_value: &Value) -> Option<&str> {
        if self.kind == FieldKind::Boolean && *new_value == Value::Bool(true) {
            self.exclusive_with.as_deref()
        } else {
            None
        }
    }
}

// ============================================================================
// SECTION: Group Specification
// ============================================================================

/// Named group of fields with optional group-level visibility.
///
/// # Invariants
/// - `fields` preserves schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Group display name.
    pub name: String,
    /// Group description for the form layer.
    #[serde(default)]
    pub description: Option<String>,
    /// Display ordering hint for the form layer.
    #[serde(default)]
    pub order: Option<u32>,
    /// Condition expression; the whole group is visible when it holds.
    #[serde(default)]
    pub show_if: Option<String>,
    /// Fields belonging to this group, in display order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl GroupSpec {
    /// Returns true when the group should be shown for the given config.
    #[must_use]
    pub fn is_visible(&self, config: &Config) -> bool {
        self.show_if.as_deref().is_none_or(|expression| evaluate_condition(expression, config))
    }
}

// ============================================================================
// SECTION: Widget Bounds
// ============================================================================

/// Recovers slider bounds from a validation rule chain.
///
/// Scans the ordered rules for the first `min:`/`max:` params, defaulting
/// to `0..=100` when absent or unparseable, mirroring how the original
/// slider widget derived its range.
#[must_use]
pub fn slider_bounds(rules: &[String]) -> (f64, f64) {
    let mut minimum = None;
    let mut maximum = None;
    for rule in rules {
        if minimum.is_none()
            && let Some(param) = rule.strip_prefix("min:")
        {
            minimum = param.parse::<f64>().ok();
        }
        if maximum.is_none()
            && let Some(param) = rule.strip_prefix("max:")
        {
            maximum = param.parse::<f64>().ok();
        }
    }
    (minimum.unwrap_or(0.0), maximum.unwrap_or(100.0))
}
