// crates/formwork-core/examples/minimal.rs
// ============================================================================
// Module: Formwork Minimal Example
// Description: Minimal end-to-end evaluation pass over an in-memory schema.
// Purpose: Demonstrate visibility, validation, and derived-value compute.
// Dependencies: formwork-core
// ============================================================================

//! ## Overview
//! Runs one evaluation pass the way a form layer would after a field
//! change: resolve visibility, validate the changed field, and recompute
//! every output field. The example is backend-agnostic and suitable for
//! quick verification.

use formwork_core::Config;
use formwork_core::FieldSpec;
use formwork_core::GroupSpec;
use formwork_core::Value;
use formwork_core::evaluate_condition;
use formwork_core::validate_field;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Builds the networking group the example evaluates against.
fn build_group() -> Result<GroupSpec, serde_json::Error> {
    serde_json::from_value(serde_json::json!({
        "name": "Networking",
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
                "name": "subnet_bits",
                "type": "slider",
                "validation": ["min:4", "max:12"]
            },
            {
                "name": "public_subnet",
                "type": "output",
                "compute": "deriveSubnet(vpc_cidr, subnet_bits, 0)"
            },
            {
                "name": "private_subnet",
                "type": "output",
                "compute": "deriveSubnet(vpc_cidr, subnet_bits, 1)"
            },
            {
                "name": "cluster_name",
                "type": "output",
                "compute": "template(\"${env}-fortigate-${region}\")"
            }
        ]
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let group = build_group()?;

    let mut config = Config::new();
    config.insert("create_vpc", true);
    config.insert("env", "prod");
    config.insert("region", "us-west-1");
    config.insert("vpc_cidr", "10.0.0.0/16");
    config.insert("subnet_bits", 8.0);

    if !group.is_visible(&config) {
        return Err(Box::new(ExampleError("networking group should be visible")));
    }
    if evaluate_condition("create_vpc == false", &config) {
        return Err(Box::new(ExampleError("negated toggle should not hold")));
    }

    // Validate the changed field the way the form layer would on input.
    let cidr_field: &FieldSpec = group
        .fields
        .iter()
        .find(|field| field.name == "vpc_cidr")
        .ok_or(ExampleError("vpc_cidr field missing from schema"))?;
    if cidr_field.validate(config.get("vpc_cidr"), &config).is_some() {
        return Err(Box::new(ExampleError("valid CIDR rejected")));
    }
    let rejected = validate_field(cidr_field.validation.as_slice(), &Value::Unset, &config);
    if rejected.as_deref() != Some("This field is required") {
        return Err(Box::new(ExampleError("unset CIDR should be required")));
    }

    // Recompute every output field from the updated config.
    let derived: Vec<(String, String)> = group
        .fields
        .iter()
        .filter(|field| field.is_output())
        .filter_map(|field| {
            field.computed_value(&config).map(|value| (field.name.clone(), value))
        })
        .collect();

    let expectations = [
        ("public_subnet", "10.0.0.0/24"),
        ("private_subnet", "10.0.1.0/24"),
        ("cluster_name", "prod-fortigate-us-west-1"),
    ];
    for (name, expected) in expectations {
        let found = derived.iter().any(|(field, value)| field == name && value == expected);
        if !found {
            return Err(Box::new(ExampleError("derived value mismatch")));
        }
    }
    Ok(())
}
