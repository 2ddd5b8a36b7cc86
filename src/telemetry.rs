//! Metric naming conventions and label keys.
//!
//! Callmeter emits through the `metrics` facade. Consumers install
//! their own recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! Call metrics are named `callmeter.<client_type>.<method>` and carry
//! a `target` label with the endpoint base URL. One duration histogram
//! is recorded per metered call; failures additionally increment a
//! counter on the `http_error` or `exception` sub-name.
//!
//! # Common labels
//!
//! - `target` — base URL of the remote endpoint
//! - `http_status` / `error_group` — on `http_error` counters
//! - `exception_name` / `root_cause_name` — on `exception` counters

/// Namespace prefix for every metric this crate emits.
pub const NAMESPACE: &str = "callmeter";

/// Sub-name for counters tracking status-coded protocol errors.
pub const HTTP_ERROR_SUFFIX: &str = "http_error";

/// Sub-name for counters tracking unclassified failures.
pub const EXCEPTION_SUFFIX: &str = "exception";

/// Label carrying the target base URL.
pub const LABEL_TARGET: &str = "target";

/// Label carrying the protocol status code, e.g. `404`.
pub const LABEL_HTTP_STATUS: &str = "http_status";

/// Label grouping status codes by leading digit, e.g. `4xx`.
pub const LABEL_ERROR_GROUP: &str = "error_group";

/// Label carrying the immediate failure's type name.
pub const LABEL_EXCEPTION_NAME: &str = "exception_name";

/// Label carrying the deepest chained cause's type name.
pub const LABEL_ROOT_CAUSE_NAME: &str = "root_cause_name";
