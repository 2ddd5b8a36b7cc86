//! Callmeter - call-level metrics for generated RPC client proxies
//!
//! This crate decorates the invocation-handler seam of a client-proxy
//! construction mechanism: wrap the factory that builds per-target
//! handlers in a [`MeteredHandlerFactory`] and every routed call gets a
//! wall-clock duration histogram plus, on failure, an outcome counter
//! tagged by status code or failure type. Transport, serialization,
//! retry, and load-balancing stay with the wrapped factory; errors are
//! observed and re-raised unchanged.
//!
//! Metrics are emitted through the `metrics` facade; install a recorder
//! (prometheus, statsd, ...) to collect them. Naming conventions live in
//! [`telemetry`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use callmeter::{
//!     DispatchHandlerFactory, InvocationHandlerFactory, MeteredHandlerFactory,
//!     MethodDescriptor, Target,
//! };
//!
//! let factory = MeteredHandlerFactory::new(DispatchHandlerFactory);
//! let target = Target::new("UserClient", "https://users.example.com");
//! let handler = factory.create(&target, dispatch);
//!
//! // Inside a generated proxy method:
//! let user = handler
//!     .invoke(&MethodDescriptor::new("UserClient", "get_user"), &args)
//!     .await?;
//! ```

pub mod error;
pub mod handler;
pub mod metered;
pub mod name;
pub mod telemetry;

// Re-export main types at crate root
pub use error::{ChainedError, InvokeError, Labeled, Result, root_cause, simple_type_name};
pub use handler::{
    DispatchHandlerFactory, DispatchTable, InvocationHandler, InvocationHandlerFactory,
    MethodDescriptor, MethodHandler, Target,
};
pub use metered::MeteredHandlerFactory;
pub use name::{MetricName, MetricNameBuilder};
