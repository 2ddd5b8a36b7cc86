//! Metered decorator over an invocation-handler factory.
//!
//! Wraps the handler produced by an inner [`InvocationHandlerFactory`]
//! and, for each intercepted call, records a wall-clock duration
//! histogram and increments an outcome counter on failure. Errors are
//! observed and re-raised unchanged; the decorator never recovers,
//! retries, or transforms them.
//!
//! Proxy-machinery methods (`equals`, `toString`, `hashCode`) and
//! default (interface-provided) methods bypass instrumentation: they
//! are not remote calls, and metering them would pollute the metric
//! namespace with meaningless entries.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;
use tracing::trace;

use crate::Result;
use crate::error::{ChainedError, InvokeError, root_cause};
use crate::handler::{
    DispatchTable, InvocationHandler, InvocationHandlerFactory, MethodDescriptor, Target,
};
use crate::name::MetricNameBuilder;
use crate::telemetry;

/// Method names declared by the proxy machinery rather than the client
/// interface; never metered.
const PROXY_OBJECT_METHODS: [&str; 3] = ["equals", "toString", "hashCode"];

/// Decorator factory that meters every handler it creates.
///
/// Metrics flow through the `metrics` facade; install a recorder to
/// collect them (see [`telemetry`](crate::telemetry) for naming
/// conventions). Without a recorder, all metric calls are no-ops.
pub struct MeteredHandlerFactory<F> {
    inner: F,
    names: MetricNameBuilder,
}

impl<F> MeteredHandlerFactory<F>
where
    F: InvocationHandlerFactory,
{
    /// Wrap an invocation-handler factory with call metering.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            names: MetricNameBuilder::new(),
        }
    }

    /// Use a custom name builder (e.g. a different namespace).
    pub fn with_name_builder(mut self, names: MetricNameBuilder) -> Self {
        self.names = names;
        self
    }
}

impl<F> InvocationHandlerFactory for MeteredHandlerFactory<F>
where
    F: InvocationHandlerFactory,
{
    fn create(&self, target: &Target, dispatch: DispatchTable) -> Arc<dyn InvocationHandler> {
        let inner = self.inner.create(target, dispatch);
        Arc::new(MeteredInvocationHandler {
            inner,
            target: target.clone(),
            names: self.names.clone(),
        })
    }
}

struct MeteredInvocationHandler {
    inner: Arc<dyn InvocationHandler>,
    target: Target,
    names: MetricNameBuilder,
}

#[async_trait]
impl InvocationHandler for MeteredInvocationHandler {
    async fn invoke(&self, method: &MethodDescriptor, args: &[Value]) -> Result<Value> {
        if PROXY_OBJECT_METHODS.contains(&method.name()) || method.is_default() {
            trace!(method = method.name(), "skipping metrics for method");
            return self.inner.invoke(method, args).await;
        }

        let name =
            self.names
                .metric_name(self.target.client_type(), method.name(), self.target.url());

        let start = Instant::now();
        let result = self.inner.invoke(method, args).await;
        // Exactly one duration sample per metered call, whatever the outcome.
        metrics::histogram!(name.as_str().to_owned(), name.labels().to_vec())
            .record(start.elapsed().as_secs_f64());

        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                let errors = match &err {
                    InvokeError::Protocol { status, .. } => name
                        .resolve(telemetry::HTTP_ERROR_SUFFIX)
                        .tagged(telemetry::LABEL_HTTP_STATUS, status.to_string())
                        .tagged(telemetry::LABEL_ERROR_GROUP, format!("{}xx", status / 100)),
                    other => name
                        .resolve(telemetry::EXCEPTION_SUFFIX)
                        .tagged(telemetry::LABEL_EXCEPTION_NAME, other.type_label().to_owned())
                        .tagged(
                            telemetry::LABEL_ROOT_CAUSE_NAME,
                            root_cause(other).type_label().to_owned(),
                        ),
                };
                metrics::counter!(errors.as_str().to_owned(), errors.labels().to_vec())
                    .increment(1);
                Err(err)
            }
        }
    }
}
