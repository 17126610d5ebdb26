// crates/formwork-core/tests/schema.rs
// ============================================================================
// Module: Schema Tests
// Description: Tests for field/group descriptors and visibility resolution.
// Purpose: Validate schema deserialization, show_if/hide_if resolution,
//          exclusive-checkbox partners, and widget bound recovery.
// Dependencies: formwork_core, serde_json
// ============================================================================
//! ## Overview
//! Validates that externally supplied schema JSON deserializes into the
//! descriptor types with rule order preserved, and that the engine-side
//! helpers resolve visibility and mutual exclusion as the form layer
//! expects.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use formwork_core::Config;
use formwork_core::FieldKind;
use formwork_core::FieldSpec;
use formwork_core::GroupSpec;
use formwork_core::Value;
use formwork_core::slider_bounds;
use support::TestResult;
use support::ensure;

/// Builds a config from string pairs.
fn config(entries: &[(&str, Value)]) -> Config {
    entries.iter().map(|(name, value)| ((*name).to_string(), value.clone())).collect()
}

// ============================================================================
// SECTION: Deserialization Tests
// ============================================================================

/// Tests deserializing a group document from schema JSON.
#[test]
fn test_group_deserialization() -> TestResult {
    let document = serde_json::json!({
        "name": "Networking",
        "description": "VPC and subnet layout",
        "order": 2,
        "show_if": "create_vpc == true",
        "fields": [
            {
                "name": "vpc_cidr",
                "type": "cidr",
                "label": "VPC CIDR",
                "validation": ["required", "cidr"],
                "default_value": "10.0.0.0/16"
            },
            {
                "name": "public_subnet",
                "type": "output",
                "compute": "deriveSubnet(vpc_cidr, subnet_bits, 0)"
            }
        ]
    });
    let group: GroupSpec = serde_json::from_value(document)?;
    ensure(group.name == "Networking", "group name should parse")?;
    ensure(group.fields.len() == 2, "both fields should parse")?;
    ensure(group.fields[0].kind == FieldKind::Cidr, "cidr kind should parse")?;
    ensure(
        group.fields[0].validation == vec!["required".to_string(), "cidr".to_string()],
        "rule order must be preserved",
    )?;
    ensure(
        group.fields[0].default_value == Value::from("10.0.0.0/16"),
        "default value should parse as a string value",
    )?;
    ensure(group.fields[1].is_output(), "output kind should parse")?;
    Ok(())
}

/// Tests the widget kind aliases carried from the original schemas.
#[test]
fn test_field_kind_aliases() -> TestResult {
    let checkbox: FieldKind = serde_json::from_value(serde_json::json!("checkbox"))?;
    ensure(checkbox == FieldKind::Boolean, "checkbox aliases boolean")?;
    let range: FieldKind = serde_json::from_value(serde_json::json!("range"))?;
    ensure(range == FieldKind::Slider, "range aliases slider")?;
    let multi: FieldKind = serde_json::from_value(serde_json::json!("multiselect"))?;
    ensure(multi == FieldKind::MultiSelect, "multiselect parses")?;
    Ok(())
}

// ============================================================================
// SECTION: Visibility Tests
// ============================================================================

/// Tests show_if/hide_if resolution on fields.
#[test]
fn test_field_visibility() -> TestResult {
    let shown: FieldSpec = serde_json::from_value(serde_json::json!({
        "name": "license_file",
        "type": "file",
        "show_if": "license_model == byol"
    }))?;
    let hidden: FieldSpec = serde_json::from_value(serde_json::json!({
        "name": "instance_count",
        "type": "number",
        "hide_if": "license_model == byol"
    }))?;
    let plain: FieldSpec = serde_json::from_value(serde_json::json!({
        "name": "region",
        "type": "select"
    }))?;

    let byol = config(&[("license_model", Value::from("byol"))]);
    let on_demand = config(&[("license_model", Value::from("on_demand"))]);

    ensure(shown.is_visible(&byol), "show_if holds, field visible")?;
    ensure(!shown.is_visible(&on_demand), "show_if fails, field hidden")?;
    ensure(!hidden.is_visible(&byol), "hide_if holds, field hidden")?;
    ensure(hidden.is_visible(&on_demand), "hide_if fails, field visible")?;
    ensure(plain.is_visible(&Config::new()), "no condition, always visible")?;
    Ok(())
}

/// Tests group-level visibility.
#[test]
fn test_group_visibility() -> TestResult {
    let group: GroupSpec = serde_json::from_value(serde_json::json!({
        "name": "Management VPC",
        "show_if": "enable_management_vpc",
        "fields": []
    }))?;
    let enabled = config(&[("enable_management_vpc", Value::Bool(true))]);
    ensure(group.is_visible(&enabled), "truthy toggle shows the group")?;
    ensure(!group.is_visible(&Config::new()), "missing toggle hides the group")?;
    Ok(())
}

// ============================================================================
// SECTION: Exclusive Partner Tests
// ============================================================================

/// Tests the exclusive-checkbox partner resolution.
#[test]
fn test_exclusive_partner() -> TestResult {
    let field: FieldSpec = serde_json::from_value(serde_json::json!({
        "name": "use_nat_gateway",
        "type": "checkbox",
        "exclusive_with": "use_internet_gateway"
    }))?;
    ensure(
        field.exclusive_partner(&Value::Bool(true)) == Some("use_internet_gateway"),
        "checking the box names the partner to clear",
    )?;
    ensure(
        field.exclusive_partner(&Value::Bool(false)).is_none(),
        "unchecking names no partner",
    )?;

    let text: FieldSpec = serde_json::from_value(serde_json::json!({
        "name": "note",
        "type": "text",
        "exclusive_with": "other"
    }))?;
    ensure(
        text.exclusive_partner(&Value::Bool(true)).is_none(),
        "only boolean kinds participate",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Derived Value and Bounds Tests
// ============================================================================

/// Tests that only output fields compute derived values.
#[test]
fn test_computed_value_gating() -> TestResult {
    let output: FieldSpec = serde_json::from_value(serde_json::json!({
        "name": "public_subnet",
        "type": "output",
        "compute": "deriveSubnet(vpc_cidr, subnet_bits, 0)"
    }))?;
    let plain: FieldSpec = serde_json::from_value(serde_json::json!({
        "name": "vpc_cidr",
        "type": "cidr",
        "compute": "deriveSubnet(vpc_cidr, subnet_bits, 0)"
    }))?;
    let cfg = config(&[
        ("vpc_cidr", Value::from("10.0.0.0/16")),
        ("subnet_bits", Value::from(8)),
    ]);
    ensure(
        output.computed_value(&cfg).as_deref() == Some("10.0.0.0/24"),
        "output fields compute",
    )?;
    ensure(plain.computed_value(&cfg).is_none(), "non-output fields never compute")?;
    Ok(())
}

/// Tests slider bound recovery from the rule chain.
#[test]
fn test_slider_bounds() -> TestResult {
    let chain = vec!["min:2".to_string(), "max:16".to_string()];
    ensure(slider_bounds(&chain) == (2.0, 16.0), "bounds come from min:/max: params")?;
    ensure(slider_bounds(&[]) == (0.0, 100.0), "defaults cover missing rules")?;
    let partial = vec!["required".to_string(), "max:8".to_string()];
    ensure(slider_bounds(&partial) == (0.0, 8.0), "missing min falls back to zero")?;
    Ok(())
}
