//! Tests for targets, method descriptors, and the dispatch-table handler.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use callmeter::{
    DispatchHandlerFactory, DispatchTable, InvocationHandlerFactory, InvokeError,
    MethodDescriptor, MethodHandler, Result, Target,
};

// ============================================================================
// Mock method handlers
// ============================================================================

struct StaticHandler(Value);

#[async_trait]
impl MethodHandler for StaticHandler {
    async fn call(&self, _args: &[Value]) -> Result<Value> {
        Ok(self.0.clone())
    }
}

struct EchoHandler;

#[async_trait]
impl MethodHandler for EchoHandler {
    async fn call(&self, args: &[Value]) -> Result<Value> {
        Ok(Value::Array(args.to_vec()))
    }
}

fn target() -> Target {
    Target::new("UserClient", "https://users.example.com")
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn target_accessors() {
    let target = target();
    assert_eq!(target.client_type(), "UserClient");
    assert_eq!(target.url(), "https://users.example.com");
}

#[test]
fn method_descriptor_accessors() {
    let method = MethodDescriptor::new("UserClient", "get_user");
    assert_eq!(method.declaring_type(), "UserClient");
    assert_eq!(method.name(), "get_user");
    assert!(!method.is_default());
    assert_eq!(method.qualified_name(), "UserClient::get_user");

    let default = MethodDescriptor::new("UserClient", "cache_key").default_method(true);
    assert!(default.is_default());
}

#[tokio::test]
async fn routes_to_the_invoked_methods_handler() {
    let get_user = MethodDescriptor::new("UserClient", "get_user");
    let list_orders = MethodDescriptor::new("UserClient", "list_orders");

    let mut dispatch = DispatchTable::new();
    dispatch.insert(get_user, Arc::new(StaticHandler(json!({"id": 7}))));
    dispatch.insert(list_orders, Arc::new(StaticHandler(json!([]))));

    let handler = DispatchHandlerFactory.create(&target(), dispatch);

    assert_eq!(handler.invoke(&get_user, &[]).await.unwrap(), json!({"id": 7}));
    assert_eq!(handler.invoke(&list_orders, &[]).await.unwrap(), json!([]));
}

#[tokio::test]
async fn arguments_reach_the_method_handler() {
    let method = MethodDescriptor::new("UserClient", "echo");
    let mut dispatch = DispatchTable::new();
    dispatch.insert(method, Arc::new(EchoHandler));

    let handler = DispatchHandlerFactory.create(&target(), dispatch);
    let result = handler.invoke(&method, &[json!(42), json!("a")]).await;

    assert_eq!(result.unwrap(), json!([42, "a"]));
}

#[tokio::test]
async fn unknown_method_is_raised() {
    let handler = DispatchHandlerFactory.create(&target(), DispatchTable::new());
    let missing = MethodDescriptor::new("UserClient", "missing");

    match handler.invoke(&missing, &[]).await {
        Err(InvokeError::UnknownMethod(name)) => assert_eq!(name, "UserClient::missing"),
        other => panic!("expected UnknownMethod, got {other:?}"),
    }
}

#[tokio::test]
async fn equal_descriptors_hit_the_same_entry() {
    let mut dispatch = DispatchTable::new();
    dispatch.insert(
        MethodDescriptor::new("UserClient", "get_user"),
        Arc::new(StaticHandler(json!("hit"))),
    );

    let handler = DispatchHandlerFactory.create(&target(), dispatch);
    // Freshly constructed descriptor, same identity.
    let method = MethodDescriptor::new("UserClient", "get_user");

    assert_eq!(handler.invoke(&method, &[]).await.unwrap(), json!("hit"));
}
