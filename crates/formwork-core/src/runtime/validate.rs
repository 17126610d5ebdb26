// crates/formwork-core/src/runtime/validate.rs
// ============================================================================
// Module: Validation Engine
// Description: Ordered validation rule chains over field values.
// Purpose: Run `name[:param]` rules first to last, stopping at the first
//          failure, with cross-field rules reading the config map.
// Dependencies: crate::core::value, log, netblock
// ============================================================================

//! ## Overview
//! A rule chain is an ordered list of `name[:param]` strings. Rules run
//! strictly in list order and the first failing rule's message is returned
//! verbatim; later rules never run. Cross-field rules (`gte`, `lte`,
//! `different-from`, `within`, `not-overlap`) read the referenced field
//! from the config map passed explicitly to every call — the engine holds
//! no ambient state. Unknown rule names warn and pass; parse failures
//! inside a rule follow each rule's fail-closed table entry rather than
//! propagating.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::value::Config;
use crate::core::value::Value;

// ============================================================================
// SECTION: Public Entry Point
// ============================================================================

/// Validates a field value against its ordered rule chain.
///
/// Returns the first failing rule's human-readable message, or `None`
/// when the chain is empty or every rule passes.
#[must_use]
pub fn validate_field(rules: &[String], value: &Value, config: &Config) -> Option<String> {
    rules.iter().find_map(|rule| apply_rule(rule, value, config))
}

// ============================================================================
// SECTION: Rule Dispatch
// ============================================================================

/// Applies one rule; returns its failure message when the rule rejects.
///
/// The rule name is the text before the first colon; the param is the text
/// between the first and second colon (any further segments are silently
/// dropped, exactly as the original splitter behaved).
fn apply_rule(rule: &str, value: &Value, config: &Config) -> Option<String> {
    let mut parts = rule.split(':');
    let name = parts.next().unwrap_or_default();
    let param = parts.next();

    match name {
        "min-length" => min_length(value, param),
        "max-length" => max_length(value, param),
        "min" => minimum(value, param),
        "max" => maximum(value, param),
        "gte" => at_least_field(value, param, config),
        "lte" => at_most_field(value, param, config),
        "cidr" => cidr(value),
        "version-format" => version_format(value),
        "single-letter" => single_letter(value),
        "different-from" => different_from(value, param, config),
        "within" => within(value, param, config),
        "not-overlap" => not_overlap(value, param, config),
        "required" => required(value),
        _ => {
            log::warn!("Unknown validation rule: {name}");
            None
        }
    }
}

// ============================================================================
// SECTION: Length Rules
// ============================================================================

/// Fails when the rendered value is shorter than the param.
fn min_length(value: &Value, param: Option<&str>) -> Option<String> {
    let limit = int_param(param)?;
    if rendered_length(value) < limit {
        return Some(format!("Minimum length is {} characters", param.unwrap_or_default()));
    }
    None
}

/// Fails when the rendered value is longer than the param.
fn max_length(value: &Value, param: Option<&str>) -> Option<String> {
    let limit = int_param(param)?;
    if rendered_length(value) > limit {
        return Some(format!("Maximum length is {} characters", param.unwrap_or_default()));
    }
    None
}

/// Length of the rendered value in characters.
fn rendered_length(value: &Value) -> i64 {
    i64::try_from(value.render().chars().count()).unwrap_or(i64::MAX)
}

/// Integer param for the length rules; an unparseable param passes the
/// rule (the caller sees `None` and the chain moves on).
fn int_param(param: Option<&str>) -> Option<i64> {
    param?.trim().parse().ok()
}

// ============================================================================
// SECTION: Numeric Bound Rules
// ============================================================================

/// Fails when the numeric value is below the param.
fn minimum(value: &Value, param: Option<&str>) -> Option<String> {
    if value.as_number() < number_param(param) {
        return Some(format!("Minimum value is {}", param.unwrap_or_default()));
    }
    None
}

/// Fails when the numeric value is above the param.
fn maximum(value: &Value, param: Option<&str>) -> Option<String> {
    if value.as_number() > number_param(param) {
        return Some(format!("Maximum value is {}", param.unwrap_or_default()));
    }
    None
}

/// Numeric param; NaN on absence or parse failure so comparisons against
/// it are false and the rule passes.
fn number_param(param: Option<&str>) -> f64 {
    param.map_or(f64::NAN, |text| {
        let trimmed = text.trim();
        if trimmed.is_empty() { f64::NAN } else { trimmed.parse().unwrap_or(f64::NAN) }
    })
}

// ============================================================================
// SECTION: Cross-Field Numeric Rules
// ============================================================================

/// Fails when the value is below the referenced field's numeric value.
///
/// Passes when the referenced field is unset so partially filled forms do
/// not flag fields whose anchor is still empty.
fn at_least_field(value: &Value, param: Option<&str>, config: &Config) -> Option<String> {
    let reference = param?;
    let anchor = config.get(reference);
    if anchor.is_unset() {
        return None;
    }
    if value.as_number() < anchor.as_number() {
        return Some(format!(
            "Must be greater than or equal to {reference} ({})",
            anchor.render()
        ));
    }
    None
}

/// Fails when the value is above the referenced field's numeric value.
fn at_most_field(value: &Value, param: Option<&str>, config: &Config) -> Option<String> {
    let reference = param?;
    let anchor = config.get(reference);
    if anchor.is_unset() {
        return None;
    }
    if value.as_number() > anchor.as_number() {
        return Some(format!("Must be less than or equal to {reference} ({})", anchor.render()));
    }
    None
}

// ============================================================================
// SECTION: Format Rules
// ============================================================================

/// Fails when the value is not a strict CIDR block.
fn cidr(value: &Value) -> Option<String> {
    if netblock::Cidr::parse(&value.render()).is_err() {
        return Some("Invalid CIDR format (e.g., 10.0.0.0/16)".to_string());
    }
    None
}

/// Fails when the value does not match `X.Y` or `X.Y.Z` version text.
fn version_format(value: &Value) -> Option<String> {
    let rendered = value.render();
    let mut count = 0_usize;
    let well_formed = rendered.split('.').all(|part| {
        count += 1;
        !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit())
    });
    if well_formed && (count == 2 || count == 3) {
        return None;
    }
    Some("Invalid version format (use X.Y or X.Y.Z)".to_string())
}

/// Fails when the value is not a single ASCII letter.
fn single_letter(value: &Value) -> Option<String> {
    let rendered = value.render();
    let mut chars = rendered.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => None,
        _ => Some("Must be a single letter (a-z)".to_string()),
    }
}

// ============================================================================
// SECTION: Cross-Field Identity Rules
// ============================================================================

/// Fails when the value strictly equals the referenced field's value.
///
/// Strict means no coercion at all: a number never equals its string
/// rendering, and comparison is case sensitive — deliberately stricter
/// than the loose `==` used by condition expressions.
fn different_from(value: &Value, param: Option<&str>, config: &Config) -> Option<String> {
    let reference = param.unwrap_or_default();
    if *value == *config.get(reference) {
        return Some(format!("Must be different from {reference}"));
    }
    None
}

// ============================================================================
// SECTION: Network Rules
// ============================================================================

/// Fails unless the value is an address inside the referenced CIDR block.
///
/// Fails closed: an unparseable value or an unset/unparseable reference
/// block rejects.
fn within(value: &Value, param: Option<&str>, config: &Config) -> Option<String> {
    let reference = param.unwrap_or_default();
    let block = config.get(reference).render();
    if !netblock::contains(&block, &value.render()) {
        return Some(format!("IP must be within {reference} CIDR range"));
    }
    None
}

/// Fails when the value is a CIDR block overlapping the referenced one.
///
/// Fails open in the overlap sense: when either side does not parse, no
/// overlap is demonstrable and the rule passes.
fn not_overlap(value: &Value, param: Option<&str>, config: &Config) -> Option<String> {
    let reference = param.unwrap_or_default();
    let block = config.get(reference).render();
    if netblock::overlap(&value.render(), &block) {
        return Some(format!("CIDR must not overlap with {reference}"));
    }
    None
}

// ============================================================================
// SECTION: Presence Rule
// ============================================================================

/// Fails when the value is unset (absent, null, or empty string).
fn required(value: &Value) -> Option<String> {
    if value.is_unset() {
        return Some("This field is required".to_string());
    }
    None
}
