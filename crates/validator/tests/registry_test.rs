//! End-to-end behaviour of the registry and its adapted validators.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use verdict_validator::prelude::*;

fn range_registry() -> ValidatorRegistry {
    let mut registry = ValidatorRegistry::new();
    registry.add(
        "range",
        |value, params| {
            let n = value.as_f64().unwrap_or(f64::NAN);
            let min = params.first().and_then(Value::as_f64).unwrap_or(f64::MIN);
            let max = params.get(1).and_then(Value::as_f64).unwrap_or(f64::MAX);
            n >= min && n <= max
        },
        Some("Must be between {0} and {1}, got {{VALUE}}"),
    );
    registry
}

// ============================================================================
// REGISTRATION
// ============================================================================

#[tokio::test]
async fn test_add() {
    let mut registry = ValidatorRegistry::new();
    registry.add("test", |value, _| value == "xueyou", Some("must be xueyou, not {{VALUE}}"));

    let validator = registry.get("test").unwrap();
    assert!(validator.validate(json!("xueyou"), vec![]).await.is_ok());

    let error = validator.validate(json!("a"), vec![]).await.unwrap_err();
    assert_eq!(error.message(), "must be xueyou, not a");
}

#[tokio::test]
async fn test_add_by_register() {
    let mut registry = ValidatorRegistry::new();
    registry.add_by_register(
        ValidatorRegister::new("test")
            .method(|value, _| value == "xueyou")
            .message("must be xueyou, not {{VALUE}}"),
    );

    let error = registry.validate("test", json!("a"), vec![]).await.unwrap_err();
    let failure = error.failure().unwrap();
    assert_eq!(failure.message, "must be xueyou, not a");
    assert_eq!(failure.validator_name, "test");
    assert_eq!(failure.value, json!("a"));
}

// ============================================================================
// RETURN SHAPES
// ============================================================================

#[tokio::test]
async fn test_true_always_resolves() {
    let mut registry = ValidatorRegistry::new();
    registry.add("yes", |_, _| true, Some("never shown"));

    for value in [json!(null), json!(1), json!("s"), json!([1]), json!({"a": 1})] {
        assert!(registry.validate("yes", value, vec![json!(1)]).await.is_ok());
    }
}

#[tokio::test]
async fn test_false_uses_default_template() {
    let mut registry = ValidatorRegistry::new();
    registry.add("no", |_, _| false, Some("M {0} {{VALUE}}"));

    let error = registry
        .validate("no", json!("v"), vec![json!("x")])
        .await
        .unwrap_err();
    assert_eq!(error.message(), "M x v");
}

#[tokio::test]
async fn test_range_scenario() {
    let registry = range_registry();

    assert!(registry.validate("range", json!(5), vec![json!(1), json!(10)]).await.is_ok());

    let error = registry
        .validate("range", json!(50), vec![json!(1), json!(10)])
        .await
        .unwrap_err();
    assert_eq!(error.message(), "Must be between 1 and 10, got 50");
}

#[tokio::test]
async fn test_rejecting_range_renders_params_and_value() {
    let mut registry = ValidatorRegistry::new();
    registry.add("range", |_, _| false, Some("Must be between {0} and {1}, got {{VALUE}}"));

    let error = registry
        .validate("range", json!(5), vec![json!(1), json!(10)])
        .await
        .unwrap_err();
    let failure = error.failure().unwrap();
    assert_eq!(failure.message, "Must be between 1 and 10, got 5");
    assert_eq!(failure.value, json!(5));
    assert_eq!(failure.params, vec![json!(1), json!(10)]);
}

#[tokio::test]
async fn test_panicking_formatter_rejects() {
    let mut registry = ValidatorRegistry::new();
    registry.add_by_register(
        ValidatorRegister::new("fmt")
            .method(|_, _| false)
            .format(|_, _, _| panic!("formatter exploded")),
    );

    let error = registry.validate("fmt", json!(1), vec![]).await.unwrap_err();
    assert!(error.is_failure());
    assert_eq!(error.message(), "formatter exploded");
}

#[tokio::test]
async fn test_deferred_panic_rejects() {
    let mut registry = ValidatorRegistry::new();
    registry.add(
        "async",
        |_, _| {
            Verdict::deferred(async {
                tokio::time::sleep(Duration::from_millis(1)).await;
                if true {
                    panic!("lookup crashed");
                }
                Ok::<(), BoxError>(())
            })
        },
        Some("default"),
    );

    let error = registry.validate("async", json!("a"), vec![]).await.unwrap_err();
    assert!(error.is_failure());
    assert_eq!(error.message(), "lookup crashed");
}

#[tokio::test]
async fn test_string_overrides_default() {
    let mut registry = ValidatorRegistry::new();
    registry.add("string", |_, _| "overrides the default", Some("validation failed"));

    let error = registry.validate("string", json!("a"), vec![]).await.unwrap_err();
    assert_eq!(error.message(), "overrides the default");
}

#[tokio::test]
async fn test_deferred_pass() {
    let mut registry = ValidatorRegistry::new();
    registry.add(
        "async",
        |value, _| {
            let ok = value == "success";
            Verdict::deferred(async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                if ok { Ok(()) } else { Err("validation failed") }
            })
        },
        None,
    );

    assert!(registry.validate("async", json!("success"), vec![]).await.is_ok());
}

#[tokio::test]
async fn test_deferred_error_message() {
    let mut registry = ValidatorRegistry::new();
    registry.add(
        "async",
        |_, _| Verdict::deferred(async { Err::<(), _>("validation failed for {{VALUE}}") }),
        Some("default"),
    );

    let error = registry.validate("async", json!("a"), vec![]).await.unwrap_err();
    assert!(error.is_failure());
    assert_eq!(error.message(), "validation failed for a");
}

#[tokio::test]
async fn test_raised_error_becomes_failure() {
    let mut registry = ValidatorRegistry::new();
    registry.add(
        "integer",
        |value, _| -> Result<bool, BoxError> {
            let n = value.as_i64().ok_or("expected an integer")?;
            Ok(n % 2 == 0)
        },
        Some("{{VALUE}} is odd"),
    );

    assert_eq!(
        registry.validate("integer", json!(3), vec![]).await.unwrap_err().message(),
        "3 is odd"
    );
    assert_eq!(
        registry.validate("integer", json!("x"), vec![]).await.unwrap_err().message(),
        "expected an integer"
    );
}

#[tokio::test]
async fn test_unsupported_return_is_contract_violation() {
    let mut registry = ValidatorRegistry::new();
    registry.add("number", |_, _| json!(42), Some("never used"));

    let error = registry.validate("number", json!(1), vec![]).await.unwrap_err();
    assert!(error.is_contract_violation());
    assert!(!error.is_failure());
    assert!(error.to_string().contains("number"));
}

// ============================================================================
// LOOKUP & MERGE
// ============================================================================

#[tokio::test]
async fn test_merge_source_wins() {
    let mut a = ValidatorRegistry::new();
    a.add("x", |_, _| false, Some("a"));
    let mut b = ValidatorRegistry::new();
    b.add("x", |_, _| false, Some("b"));

    let merged = a.merge(Some(&b));
    let error = merged.validate("x", json!(0), vec![]).await.unwrap_err();
    assert_eq!(error.message(), "b");
}

#[tokio::test]
async fn test_case_insensitive_lookup() {
    let mut registry = ValidatorRegistry::new();
    registry.add("Test", |_, _| false, Some("from Test"));

    let error = registry.validate("test", json!(0), vec![]).await.unwrap_err();
    assert_eq!(error.message(), "from Test");
    assert_eq!(error.failure().unwrap().validator_name, "Test");
}

#[tokio::test]
async fn test_lookup_miss() {
    let registry = range_registry();
    assert!(registry.get("unknown").is_none());

    let error = registry.validate("unknown", json!(1), vec![]).await.unwrap_err();
    assert!(matches!(error, ValidateError::UnknownValidator(name) if name == "unknown"));
}

#[tokio::test]
async fn test_construct_from_other() {
    let base = range_registry();
    let mut extended = ValidatorRegistry::from_other(&base);
    extended.add("extra", |_, _| true, None);

    assert_eq!(base.len(), 1);
    assert_eq!(extended.len(), 2);
    assert!(extended.validate("range", json!(2), vec![json!(1), json!(3)]).await.is_ok());
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[tokio::test]
async fn test_adapted_future_can_be_spawned() {
    let registry = range_registry();
    let validator = registry.get("range").unwrap();

    let handle = tokio::spawn(validator.validate(json!(0), vec![json!(1), json!(2)]));
    let error = handle.await.unwrap().unwrap_err();
    assert_eq!(error.message(), "Must be between 1 and 2, got 0");
}

#[tokio::test]
async fn test_pending_validator_can_be_timed_out() {
    let mut registry = ValidatorRegistry::new();
    registry.add(
        "never",
        |_, _| Verdict::deferred(futures::future::pending::<Result<(), BoxError>>()),
        None,
    );

    let call = registry.validate("never", json!(1), vec![]);
    let outcome = tokio::time::timeout(Duration::from_millis(20), call).await;
    assert!(outcome.is_err());
}
