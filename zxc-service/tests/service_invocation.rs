use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use zxc_service::{
    Arguments, InputOptions, Inputs, OutcomeStatus, SchemaBuilder, Service, ServiceError,
    ServiceInvoker, ServiceResult,
};

fn args(value: Value) -> Arguments {
    Arguments::try_from(value).unwrap()
}

#[derive(Default)]
struct TestService;

impl Service for TestService {
    const NAME: &'static str = "TestService";
    type Output = String;

    fn declare(schema: SchemaBuilder) -> SchemaBuilder {
        schema
            .declare_input("test_arg_without_default", InputOptions::required())
            .declare_input("test_arg_with_default_nil", InputOptions::with_default(Value::Null))
            .declare_input(
                "test_arg_with_default_string",
                InputOptions::with_default("default string!!"),
            )
            .declare_input(
                "test_arg_with_default_proc",
                InputOptions::with_computed_default(|| Utc::now().to_rfc3339()),
            )
    }

    fn call(&self, _inputs: &Inputs) -> ServiceResult<String> {
        Ok("success!".to_string())
    }
}

#[derive(Default)]
struct NotImplementedTestService;

impl Service for NotImplementedTestService {
    const NAME: &'static str = "NotImplementedTestService";
    type Output = ();
}

#[derive(Default)]
struct TestMultipleInputsService;

impl Service for TestMultipleInputsService {
    const NAME: &'static str = "TestMultipleInputsService";
    type Output = String;

    fn declare(schema: SchemaBuilder) -> SchemaBuilder {
        schema
            .declare_inputs(
                ["test_arg_without_default", "test_arg_without_default2"],
                InputOptions::required(),
            )
            .declare_inputs(
                ["test_arg_with_default", "test_arg_with_default2"],
                InputOptions::with_default("default string!!"),
            )
    }

    fn call(&self, _inputs: &Inputs) -> ServiceResult<String> {
        Ok("success!".to_string())
    }
}

#[derive(Default)]
struct TestExceptionService;

impl Service for TestExceptionService {
    const NAME: &'static str = "TestExceptionService";
    type Output = String;

    fn call(&self, _inputs: &Inputs) -> ServiceResult<String> {
        Err(anyhow::anyhow!("An error occurred").into())
    }
}

// 计算默认值每次调用都重新求值
#[derive(Default)]
struct TicketService {
    issued: AtomicUsize,
}

impl Service for TicketService {
    const NAME: &'static str = "TicketService";
    type Output = Value;

    fn declare(schema: SchemaBuilder) -> SchemaBuilder {
        schema.declare_input("ticket", InputOptions::required())
    }

    fn call(&self, inputs: &Inputs) -> ServiceResult<Value> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        Ok(inputs.get("ticket").cloned().unwrap_or(Value::Null))
    }
}

#[test]
fn all_inputs_present() {
    let invoker = ServiceInvoker::<TestService>::default();
    let outcome = invoker
        .invoke(args(json!({
            "test_arg_without_default": "test",
            "test_arg_with_default_nil": "test",
            "test_arg_with_default_string": "test",
            "test_arg_with_default_proc": "test",
        })))
        .unwrap();

    assert!(outcome.is_valid());
    assert!(outcome.errors().is_empty());
    assert_eq!(outcome.result().map(String::as_str), Some("success!"));
    assert_eq!(outcome.status(), OutcomeStatus::Succeeded);
    assert_eq!(outcome.get("test_arg_with_default_proc"), Some(&json!("test")));
}

#[test]
fn missing_required_input() {
    let invoker = ServiceInvoker::<TestService>::default();
    let outcome = invoker
        .invoke(args(json!({
            "test_arg_with_default_nil": "test",
            "test_arg_with_default_string": "test",
            "test_arg_with_default_proc": "test",
        })))
        .unwrap();

    assert!(outcome.is_invalid());
    assert_eq!(outcome.errors(), ["test_arg_without_default is required"]);
    assert!(outcome.result().is_none());
    assert_eq!(outcome.get("test_arg_without_default"), None);
}

#[test]
fn missing_input_with_nil_default() {
    let invoker = ServiceInvoker::<TestService>::default();
    let outcome = invoker
        .invoke(args(json!({
            "test_arg_without_default": "test",
            "test_arg_with_default_string": "test",
            "test_arg_with_default_proc": "test",
        })))
        .unwrap();

    assert!(outcome.is_valid());
    assert_eq!(outcome.get("test_arg_with_default_nil"), Some(&Value::Null));
}

#[test]
fn missing_input_with_string_default() {
    let invoker = ServiceInvoker::<TestService>::default();
    let outcome = invoker
        .invoke(args(json!({
            "test_arg_without_default": "test",
            "test_arg_with_default_nil": "test",
            "test_arg_with_default_proc": "test",
        })))
        .unwrap();

    assert!(outcome.is_valid());
    assert_eq!(
        outcome.value::<String>("test_arg_with_default_string").unwrap(),
        "default string!!"
    );
}

#[test]
fn missing_input_with_computed_default() {
    let invoker = ServiceInvoker::<TestService>::default();
    let outcome = invoker
        .invoke(args(json!({
            "test_arg_without_default": "test",
            "test_arg_with_default_nil": "test",
            "test_arg_with_default_string": "test",
        })))
        .unwrap();

    assert!(outcome.is_valid());
    let stamp: String = outcome.value("test_arg_with_default_proc").unwrap();
    assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
}

#[test]
fn computed_default_is_fresh_per_invocation() {
    struct Counter;

    impl Service for Counter {
        const NAME: &'static str = "Counter";
        type Output = i64;

        fn declare(schema: SchemaBuilder) -> SchemaBuilder {
            static NEXT: AtomicUsize = AtomicUsize::new(0);
            schema.declare_input(
                "n",
                InputOptions::with_computed_default(|| NEXT.fetch_add(1, Ordering::SeqCst) as i64),
            )
        }

        fn call(&self, inputs: &Inputs) -> ServiceResult<i64> {
            inputs.value("n")
        }
    }

    let invoker = ServiceInvoker::new(Counter);
    let first = invoker.invoke_strict(Arguments::new()).unwrap();
    let second = invoker.invoke_strict(Arguments::new()).unwrap();
    assert_eq!(second, first + 1);
}

#[test]
fn explicit_null_is_not_replaced_by_default() {
    let invoker = ServiceInvoker::<TestService>::default();
    let outcome = invoker
        .invoke(args(json!({
            "test_arg_without_default": "test",
            "test_arg_with_default_string": null,
        })))
        .unwrap();

    assert!(outcome.is_valid());
    assert_eq!(outcome.get("test_arg_with_default_string"), Some(&Value::Null));
    assert_eq!(
        outcome.value::<Option<String>>("test_arg_with_default_string").unwrap(),
        None
    );
}

#[test]
fn not_implemented_is_returned_in_both_modes() {
    let invoker = ServiceInvoker::<NotImplementedTestService>::default();

    let err = invoker.invoke(Arguments::new()).unwrap_err();
    assert!(err.is_not_implemented());
    assert_eq!(err.to_string(), "NotImplementedTestService#call not implemented");

    let err = invoker.invoke_strict(Arguments::new()).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotImplemented {
            service: "NotImplementedTestService"
        }
    ));
}

#[test]
fn multiple_inputs_all_present() {
    let invoker = ServiceInvoker::<TestMultipleInputsService>::default();
    let outcome = invoker
        .invoke(args(json!({
            "test_arg_without_default": "test",
            "test_arg_without_default2": "test",
            "test_arg_with_default": "test",
        })))
        .unwrap();

    assert!(outcome.is_valid());
    assert_eq!(outcome.result().map(String::as_str), Some("success!"));
    assert_eq!(outcome.get("test_arg_with_default2"), Some(&json!("default string!!")));
}

#[test]
fn multiple_inputs_one_missing() {
    let invoker = ServiceInvoker::<TestMultipleInputsService>::default();
    let outcome = invoker
        .invoke(args(json!({
            "test_arg_without_default": "test",
            "test_arg_with_default": "test",
        })))
        .unwrap();

    assert!(outcome.is_invalid());
    assert_eq!(outcome.errors(), ["test_arg_without_default2 is required"]);
}

#[test]
fn errors_follow_declaration_order() {
    let invoker = ServiceInvoker::<TestMultipleInputsService>::default();
    let outcome = invoker.invoke(Arguments::new()).unwrap();

    assert_eq!(
        outcome.errors(),
        [
            "test_arg_without_default is required",
            "test_arg_without_default2 is required",
        ]
    );
}

#[test]
fn failing_call_is_collected() {
    let invoker = ServiceInvoker::<TestExceptionService>::default();
    let outcome = invoker.invoke(Arguments::new()).unwrap();

    assert!(outcome.is_invalid());
    assert_eq!(outcome.errors(), ["An error occurred"]);
    assert!(outcome.result().is_none());
    assert_eq!(outcome.status(), OutcomeStatus::ExecutionFailed);
}

#[test]
fn arguments_are_kept_verbatim() {
    let invoker = ServiceInvoker::<TestService>::default();
    let raw = args(json!({ "test_arg_without_default": "x", "unknown": [1, 2] }));
    let outcome = invoker.invoke(raw.clone()).unwrap();

    assert_eq!(outcome.arguments(), &raw);
    assert!(!outcome.inputs().contains("unknown"));
}

#[test]
fn strict_returns_bare_result() {
    let invoker = ServiceInvoker::<TestService>::default();
    let result = invoker
        .invoke_strict(Arguments::new().with("test_arg_without_default", "123"))
        .unwrap();
    assert_eq!(result, "success!");
}

#[test]
fn strict_with_missing_inputs_fails_with_joined_messages() {
    let invoker = ServiceInvoker::<TestService>::default();
    let err = invoker.invoke_strict(Arguments::new()).unwrap_err();
    match &err {
        ServiceError::InvocationFailed { errors } => {
            assert_eq!(errors, &["test_arg_without_default is required"])
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "test_arg_without_default is required");

    let invoker = ServiceInvoker::<TestMultipleInputsService>::default();
    let err = invoker.invoke_strict(Arguments::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "test_arg_without_default is required; test_arg_without_default2 is required"
    );
}

#[test]
fn strict_propagates_call_error_unchanged() {
    let invoker = ServiceInvoker::<TestExceptionService>::default();
    let err = invoker.invoke_strict(Arguments::new()).unwrap_err();
    assert!(matches!(err, ServiceError::Execution(_)));
    assert_eq!(err.to_string(), "An error occurred");
}

#[test]
fn outcomes_are_independent_per_call() {
    let invoker = ServiceInvoker::<TicketService>::default();
    let a = invoker.invoke(Arguments::new().with("ticket", 1)).unwrap();
    let b = invoker.invoke(Arguments::new()).unwrap();
    let c = invoker.invoke(Arguments::new().with("ticket", 3)).unwrap();

    assert_eq!(a.result(), Some(&json!(1)));
    assert!(b.is_invalid());
    assert_eq!(c.result(), Some(&json!(3)));
    assert!(a.is_valid());
    assert_eq!(invoker.service().issued.load(Ordering::SeqCst), 2);
}
