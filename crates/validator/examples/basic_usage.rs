//! Basic usage example for verdict-validator

use serde_json::{Value, json};
use verdict_validator::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut registry = ValidatorRegistry::new();

    registry
        .add("required", |value, _| !value.is_null(), Some("This field is required"))
        .add(
            "range",
            |value, params| {
                let n = value.as_f64().unwrap_or(f64::NAN);
                let min = params.first().and_then(Value::as_f64).unwrap_or(f64::MIN);
                let max = params.get(1).and_then(Value::as_f64).unwrap_or(f64::MAX);
                n >= min && n <= max
            },
            Some("Must be between {0} and {1}, got {{VALUE}}"),
        )
        .add_by_register(ValidatorRegister::new("username").method(|value, _| {
            let taken = value == "admin";
            Verdict::deferred(async move {
                if taken { Err("'{{VALUE}}' is already taken") } else { Ok(()) }
            })
        }));

    let checks = [
        ("required", json!(null), vec![]),
        ("range", json!(5), vec![json!(1), json!(10)]),
        ("RANGE", json!(50), vec![json!(1), json!(10)]),
        ("username", json!("admin"), vec![]),
        ("username", json!("alice"), vec![]),
        ("email", json!("a@b.c"), vec![]),
    ];

    for (name, value, params) in checks {
        match registry.validate(name, value.clone(), params).await {
            Ok(()) => println!("✓ {name}({value}) passed"),
            Err(e) => println!("✗ {name}({value}): {e}"),
        }
    }
}
