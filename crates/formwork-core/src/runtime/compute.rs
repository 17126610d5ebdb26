// crates/formwork-core/src/runtime/compute.rs
// ============================================================================
// Module: Derived-Value Compute Engine
// Description: Expression evaluation for read-only output fields.
// Purpose: Produce derived values (subnet derivation, string templating)
//          from the configuration map with a fail-soft public surface.
// Dependencies: crate::core::value, crate::error, netblock
// ============================================================================

//! ## Overview
//! Output fields carry one of two expression forms, probed in order:
//! `deriveSubnet(fieldA, fieldB, index)` resolves two field references and
//! derives the index-th subnet of the referenced parent block, and
//! `template("...")` substitutes `${fieldName}` placeholders with set
//! config values. Neither form nests. The public entry point degrades
//! every internal failure to the empty string; the `Result`-returning
//! layer underneath reports structured [`EngineError`] reasons.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::value::Config;
use crate::error::EngineError;
use crate::error::EngineResult;

// ============================================================================
// SECTION: Public Entry Points
// ============================================================================

/// Computes a derived field value, degrading failures to empty text.
///
/// An empty expression, an unrecognized expression, an unset operand, and
/// any arithmetic failure all yield the empty string — the engine must
/// never take down form rendering.
#[must_use]
pub fn compute_value(expression: &str, config: &Config) -> String {
    try_compute_value(expression, config).unwrap_or_default()
}

/// Computes a derived field value, reporting structured failures.
///
/// # Errors
///
/// Returns [`EngineError`] when the expression matches no recognized form,
/// an operand field is unset or non-numeric, or subnet derivation fails.
pub fn try_compute_value(expression: &str, config: &Config) -> EngineResult<String> {
    if expression.is_empty() {
        return Ok(String::new());
    }
    if let Some((parent_field, bits_field, index)) = match_derive_subnet(expression) {
        return derive_subnet(parent_field, bits_field, index, config);
    }
    if let Some(template) = match_template(expression) {
        return Ok(render_template(template, config));
    }
    Err(EngineError::UnknownExpression {
        expression: expression.to_string(),
    })
}

// ============================================================================
// SECTION: Subnet Derivation Form
// ============================================================================

/// Matches `deriveSubnet(<fieldA>, <fieldB>, <literalIndex>)` anywhere in
/// the expression, returning the trimmed field references and the index.
fn match_derive_subnet(expression: &str) -> Option<(&str, &str, u32)> {
    let start = expression.find("deriveSubnet(")?;
    let rest = &expression[start + "deriveSubnet(".len()..];
    let (parent_field, rest) = rest.split_once(',')?;
    if parent_field.is_empty() {
        return None;
    }
    let (bits_field, rest) = rest.trim_start().split_once(',')?;
    if bits_field.is_empty() {
        return None;
    }
    let rest = rest.trim_start();
    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 || !rest[digit_count..].starts_with(')') {
        return None;
    }
    let index = rest[..digit_count].parse().ok()?;
    Some((parent_field.trim(), bits_field.trim(), index))
}

/// Resolves the operand fields and derives the requested subnet.
fn derive_subnet(
    parent_field: &str,
    bits_field: &str,
    index: u32,
    config: &Config,
) -> EngineResult<String> {
    let parent = config.get(parent_field);
    if parent.is_unset() {
        return Err(EngineError::UnsetOperand {
            field: parent_field.to_string(),
        });
    }
    let bits = config.get(bits_field);
    if bits.is_unset() {
        return Err(EngineError::UnsetOperand {
            field: bits_field.to_string(),
        });
    }
    let rendered_bits = bits.render();
    let extra_bits: u32 = rendered_bits.parse().map_err(|_| EngineError::NotNumeric {
        text: rendered_bits,
    })?;
    let derived = netblock::derive_subnet(&parent.render(), extra_bits, index)?;
    Ok(derived.to_string())
}

// ============================================================================
// SECTION: Template Form
// ============================================================================

/// Matches `template("<text>")` anywhere in the expression, returning the
/// text between the opening quote and the last closing `")`.
fn match_template(expression: &str) -> Option<&str> {
    let start = expression.find("template(\"")?;
    let rest = &expression[start + "template(\"".len()..];
    let end = rest.rfind("\")")?;
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// Substitutes `${fieldName}` placeholders with set config values.
///
/// Placeholders whose field is unset stay as literal `${fieldName}` text;
/// a `${` with no closing brace is copied through unchanged.
fn render_template(template: &str, config: &Config) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                let name = after[..end].trim();
                let value = config.get(name);
                if value.is_unset() {
                    output.push_str(&rest[start..=start + 2 + end]);
                } else {
                    output.push_str(&value.render());
                }
                rest = &after[end + 1..];
            }
            _ => {
                output.push_str("${");
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}
