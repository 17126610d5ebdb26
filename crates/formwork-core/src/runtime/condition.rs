// crates/formwork-core/src/runtime/condition.rs
// ============================================================================
// Module: Condition Evaluator
// Description: Boolean visibility expressions over the configuration map.
// Purpose: Decide show/hide branching from the restricted `||`/`&&`
//          comparison grammar with deterministic coercion per operator.
// Dependencies: crate::core::value
// ============================================================================

//! ## Overview
//! Conditions are split naively on `||` then `&&` (OR binds looser than
//! AND; there is no parenthesization and no escaping, so a literal
//! containing either delimiter is mis-split — a documented grammar
//! restriction, not an extension point). Each atom is `field op literal`
//! with operators probed in the fixed order `>=`, `<=`, `>`, `<`, `!=`,
//! `==` so the two-character forms win over their one-character prefixes;
//! an atom with no operator is a truthiness test of the named field.
//! Evaluation is total: missing fields behave as unset, non-numeric values
//! compare as NaN (always false), and the evaluator never panics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::value::Config;
use crate::core::value::Value;

// ============================================================================
// SECTION: Operators
// ============================================================================

/// Comparison operators, in probe order.
///
/// The order matters: `>=`/`<=` must be probed before `>`/`<` so the
/// longer token is never mis-read as its one-character prefix.
const OPERATORS: [(&str, Operator); 6] = [
    (">=", Operator::GreaterOrEqual),
    ("<=", Operator::LessOrEqual),
    (">", Operator::Greater),
    ("<", Operator::Less),
    ("!=", Operator::NotEqual),
    ("==", Operator::Equal),
];

/// Comparison operator inside a single atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    /// Numeric `>=`.
    GreaterOrEqual,
    /// Numeric `<=`.
    LessOrEqual,
    /// Numeric `>`.
    Greater,
    /// Numeric `<`.
    Less,
    /// Loose inequality.
    NotEqual,
    /// Loose equality.
    Equal,
}

// ============================================================================
// SECTION: Public Entry Point
// ============================================================================

/// Evaluates a visibility condition against the configuration map.
///
/// An empty expression is always true (the field is always visible). The
/// expression is true when at least one `||` part holds, and a `||` part
/// holds when all of its `&&` atoms hold. Never panics; malformed input
/// degrades to a truthiness test or to false.
#[must_use]
pub fn evaluate_condition(expression: &str, config: &Config) -> bool {
    if expression.is_empty() {
        return true;
    }
    expression
        .split("||")
        .map(str::trim)
        .any(|or_part| or_part.split("&&").map(str::trim).all(|atom| evaluate_atom(atom, config)))
}

// ============================================================================
// SECTION: Atom Evaluation
// ============================================================================

/// Evaluates a single `field op literal` atom, or a bare truthiness test.
fn evaluate_atom(atom: &str, config: &Config) -> bool {
    let Some((field, operator, literal_text)) = split_comparison(atom) else {
        return config.get(atom.trim()).truthy();
    };
    let actual = config.get(field);
    let literal = parse_literal(literal_text);
    match operator {
        Operator::GreaterOrEqual => actual.as_number() >= literal.as_number(),
        Operator::LessOrEqual => actual.as_number() <= literal.as_number(),
        Operator::Greater => actual.as_number() > literal.as_number(),
        Operator::Less => actual.as_number() < literal.as_number(),
        Operator::NotEqual => !loose_equal(actual, &literal),
        Operator::Equal => loose_equal(actual, &literal),
    }
}

/// Splits an atom into field name, operator, and literal text.
///
/// The field name is a leading `\w+` run; each operator is probed in
/// [`OPERATORS`] order at the position following the name and optional
/// whitespace, and the literal is whatever non-empty text remains. Atoms
/// that do not fit this shape yield `None` and fall back to the bare
/// truthiness test.
fn split_comparison(atom: &str) -> Option<(&str, Operator, &str)> {
    let name_len = atom
        .bytes()
        .take_while(|byte| byte.is_ascii_alphanumeric() || *byte == b'_')
        .count();
    if name_len == 0 {
        return None;
    }
    let (field, after_name) = atom.split_at(name_len);
    let after_name = after_name.trim_start();
    for (token, operator) in OPERATORS {
        if let Some(rest) = after_name.strip_prefix(token) {
            let literal = rest.trim_start();
            let literal = if literal.is_empty() { rest } else { literal };
            if literal.is_empty() {
                continue;
            }
            return Some((field, operator, literal));
        }
    }
    None
}

// ============================================================================
// SECTION: Literal Parsing
// ============================================================================

/// Parses the right-hand literal of a comparison.
///
/// Exact `true`/`false` tokens become booleans; text matching the signed
/// decimal pattern becomes a number; matching surrounding single or double
/// quotes are stripped; everything else stays a string.
fn parse_literal(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed == "true" {
        return Value::Bool(true);
    }
    if trimmed == "false" {
        return Value::Bool(false);
    }
    if is_decimal(trimmed) {
        return Value::Number(trimmed.parse().unwrap_or(f64::NAN));
    }
    if trimmed.len() >= 2 {
        let quoted = (trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\''));
        if quoted {
            return Value::String(trimmed[1..trimmed.len() - 1].to_string());
        }
    }
    Value::String(trimmed.to_string())
}

/// Returns true for the signed decimal pattern `-?\d+(\.\d+)?`.
fn is_decimal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (integral, fractional) = match digits.split_once('.') {
        Some((integral, fractional)) => (integral, Some(fractional)),
        None => (digits, None),
    };
    if integral.is_empty() || !integral.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    fractional.is_none_or(|part| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit()))
}

// ============================================================================
// SECTION: Loose Equality
// ============================================================================

/// Compares an actual value against a parsed literal.
///
/// Boolean literals compare by truthiness, numeric literals numerically
/// (NaN never equals), and string literals as case-insensitive rendered
/// text.
fn loose_equal(actual: &Value, literal: &Value) -> bool {
    match literal {
        Value::Bool(expected) => actual.truthy() == *expected,
        Value::Number(expected) => actual.as_number() == *expected,
        _ => actual.render().to_lowercase() == literal.render().to_lowercase(),
    }
}
