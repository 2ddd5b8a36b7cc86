//! Hierarchical, taggable metric names.
//!
//! Names are derived deterministically from (client type, method, target
//! URL), so a recorder keyed by (name, labels) resolves repeated calls to
//! the same method on the same target to the same metric.

use metrics::{Label, SharedString};

use crate::telemetry;

/// Hierarchical metric identifier plus its labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricName {
    name: String,
    labels: Vec<Label>,
}

impl MetricName {
    /// Append a path segment to the name.
    pub fn resolve(mut self, segment: &str) -> Self {
        self.name.push('.');
        self.name.push_str(segment);
        self
    }

    /// Attach a key/value tag.
    pub fn tagged<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<SharedString>,
        V: Into<SharedString>,
    {
        self.labels.push(Label::new(key, value));
        self
    }

    /// Full dotted name.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Attached labels, in insertion order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

/// Derives call metric names scoped to a namespace.
#[derive(Debug, Clone)]
pub struct MetricNameBuilder {
    namespace: &'static str,
}

impl Default for MetricNameBuilder {
    fn default() -> Self {
        Self {
            namespace: telemetry::NAMESPACE,
        }
    }
}

impl MetricNameBuilder {
    /// Builder scoped to the default `callmeter` namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder scoped to a custom namespace.
    pub fn with_namespace(namespace: &'static str) -> Self {
        Self { namespace }
    }

    /// Metric name for one method invocation against one target.
    ///
    /// Deterministic: `<namespace>.<client_type>.<method>`, tagged
    /// `target=<url>`.
    pub fn metric_name(&self, client_type: &str, method: &str, url: &str) -> MetricName {
        MetricName {
            name: format!("{}.{}.{}", self.namespace, client_type, method),
            labels: vec![Label::new(telemetry::LABEL_TARGET, url.to_owned())],
        }
    }
}
