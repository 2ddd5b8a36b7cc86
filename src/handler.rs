//! Dispatch seam: targets, method descriptors, and invocation handlers.
//!
//! A client-proxy generator produces one forwarding implementation per
//! client interface; every generated method routes its call through an
//! [`InvocationHandler`] built by an [`InvocationHandlerFactory`] for
//! the proxy's [`Target`]. [`DispatchHandlerFactory`] supplies the
//! standard handler that executes the dispatch-table entry for the
//! invoked method. Cross-cutting concerns wrap the factory, see
//! [`MeteredHandlerFactory`](crate::MeteredHandlerFactory).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{InvokeError, Result};

/// Logical remote endpoint a client proxy was built for.
///
/// Immutable; supplied once per proxy instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    client_type: String,
    url: String,
}

impl Target {
    /// Target for a logical client type and base URL.
    pub fn new(client_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            client_type: client_type.into(),
            url: url.into(),
        }
    }

    /// Logical client type the proxy fronts.
    pub fn client_type(&self) -> &str {
        &self.client_type
    }

    /// Base URL of the remote endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Identity of a method on a client interface.
///
/// Emitted as generation-time constants by the proxy generator; doubles
/// as the dispatch-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    declaring_type: &'static str,
    name: &'static str,
    default_method: bool,
}

impl MethodDescriptor {
    /// Descriptor for a method declared on `declaring_type`.
    pub fn new(declaring_type: &'static str, name: &'static str) -> Self {
        Self {
            declaring_type,
            name,
            default_method: false,
        }
    }

    /// Mark this as a default (interface-provided) method.
    pub fn default_method(mut self, default_method: bool) -> Self {
        self.default_method = default_method;
        self
    }

    /// Interface the method is declared on.
    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    /// Method name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the method body is interface-provided rather than remote.
    pub fn is_default(&self) -> bool {
        self.default_method
    }

    /// `DeclaringType::method` form for error messages.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.declaring_type, self.name)
    }
}

/// Per-method call logic owned by the dispatch layer.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    /// Execute the call with its (already encoded) arguments.
    async fn call(&self, args: &[Value]) -> Result<Value>;
}

/// Mapping from method identity to its call logic.
pub type DispatchTable = HashMap<MethodDescriptor, Arc<dyn MethodHandler>>;

/// Executes a proxied method call against the real remote target.
#[async_trait]
pub trait InvocationHandler: Send + Sync {
    /// Route one method invocation.
    async fn invoke(&self, method: &MethodDescriptor, args: &[Value]) -> Result<Value>;
}

/// Produces the per-target invocation handler a proxy forwards to.
pub trait InvocationHandlerFactory: Send + Sync {
    /// Build a handler for `target` over the caller's dispatch table.
    fn create(&self, target: &Target, dispatch: DispatchTable) -> Arc<dyn InvocationHandler>;
}

/// Standard factory: handlers route each call to its dispatch-table
/// entry, raising [`InvokeError::UnknownMethod`] on a miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct DispatchHandlerFactory;

impl InvocationHandlerFactory for DispatchHandlerFactory {
    fn create(&self, _target: &Target, dispatch: DispatchTable) -> Arc<dyn InvocationHandler> {
        Arc::new(DispatchInvocationHandler { dispatch })
    }
}

struct DispatchInvocationHandler {
    dispatch: DispatchTable,
}

#[async_trait]
impl InvocationHandler for DispatchInvocationHandler {
    async fn invoke(&self, method: &MethodDescriptor, args: &[Value]) -> Result<Value> {
        match self.dispatch.get(method) {
            Some(handler) => handler.call(args).await,
            None => Err(InvokeError::UnknownMethod(method.qualified_name())),
        }
    }
}
