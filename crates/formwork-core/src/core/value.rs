// crates/formwork-core/src/core/value.rs
// ============================================================================
// Module: Dynamic Configuration Values
// Description: Tagged value type, configuration map, and coercion rules.
// Purpose: Give loosely typed form values one explicit, documented coercion
//          table instead of host-language implicit conversion.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Value`] is one current form-field value: string, number, boolean,
//! list of strings, or unset. Absent key, JSON `null`, and the empty string
//! are equivalent for truthiness and validation-skip purposes. Every
//! coercion the engine performs goes through the three documented functions
//! here ([`Value::truthy`], [`Value::as_number`], [`Value::render`]); no
//! other conversion paths exist.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Value Type
// ============================================================================

/// Sentinel returned for missing configuration keys.
static UNSET: Value = Value::Unset;

/// Dynamically typed form-field value.
///
/// # Invariants
/// - `Unset` and `String("")` are interchangeable for truthiness and
///   validation-skip checks ([`Value::is_unset`] treats both as unset);
///   strict equality still distinguishes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean toggle value.
    Bool(bool),
    /// Numeric value; non-finite values compare like any other NaN input.
    Number(f64),
    /// Free-form text value.
    String(String),
    /// Ordered list of strings (multi-select and list widgets).
    List(Vec<String>),
    /// Absent value; deserializes from JSON `null`.
    #[default]
    Unset,
}

impl Value {
    /// Returns true when the value is unset (absent, null, or empty
    /// string).
    #[must_use]
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Unset => true,
            Self::String(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Coerces the value to a boolean.
    ///
    /// Zero, NaN, the empty string, and unset are false; lists are always
    /// true (even when empty, matching the source system).
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::List(_) => true,
            Self::Unset => false,
        }
    }

    /// Coerces the value to a number, with NaN marking non-numeric input.
    ///
    /// Booleans map to 0/1; strings are trimmed and parsed as decimal;
    /// unset, lists, and unparseable strings yield NaN so every ordering
    /// comparison against them is false.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Bool(flag) => {
                if *flag {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Number(number) => *number,
            Self::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() { f64::NAN } else { trimmed.parse().unwrap_or(f64::NAN) }
            }
            Self::List(_) | Self::Unset => f64::NAN,
        }
    }

    /// Renders the value as display text.
    ///
    /// Integral numbers print without a fractional part; lists join with
    /// commas; unset renders as the empty string.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Bool(flag) => flag.to_string(),
            Self::Number(number) => render_number(*number),
            Self::String(text) => text.clone(),
            Self::List(items) => items.join(","),
            Self::Unset => String::new(),
        }
    }

    /// Returns the value as a string slice when it is textual.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Renders a number the way form output expects: integral values without a
/// fractional part, everything else in shortest decimal form.
fn render_number(number: f64) -> String {
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Guarded by the finite, integral, |n| < 1e15 checks above."
        )]
        let integral = number as i64;
        integral.to_string()
    } else {
        number.to_string()
    }
}

// ============================================================================
// SECTION: Configuration Map
// ============================================================================

/// Runtime mapping from field name to its current value.
///
/// Owned by the form layer; the engine only reads it during a single call
/// and never retains a reference.
///
/// # Invariants
/// - Lookups of missing keys yield [`Value::Unset`]; the map never stores a
///   marker for absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config(BTreeMap<String, Value>);

impl Config {
    /// Creates an empty configuration map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the current value for `name`, or unset when absent.
    #[must_use]
    pub fn get(&self, name: &str) -> &Value {
        self.0.get(name).unwrap_or(&UNSET)
    }

    /// Returns true when `name` holds a set (non-empty) value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        !self.get(name).is_unset()
    }

    /// Inserts or replaces the value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Removes the value for `name`, if present.
    pub fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over stored name/value pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Config {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(entries: I) -> Self {
        Self(entries.into_iter().map(|(name, value)| (name.into(), value.into())).collect())
    }
}
