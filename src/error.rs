//! Callmeter error types and the labelled cause chain.

use std::error::Error;
use std::fmt;

/// Failure raised by an invocation handler.
///
/// The metered decorator classifies every failed call as either a
/// protocol error (status-coded) or an unclassified failure; both are
/// observed for metrics and re-raised unchanged.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// Remote call completed with a non-success status code.
    #[error("protocol error ({status}): {message}")]
    Protocol { status: u16, message: String },

    /// Any other failure raised while executing the call.
    #[error("call failed: {0}")]
    Failure(Box<dyn ChainedError>),

    /// The dispatch table has no handler for the invoked method.
    #[error("no handler for method {0}")]
    UnknownMethod(String),
}

impl InvokeError {
    /// Protocol-level error with an HTTP-like status code.
    pub fn protocol(status: u16, message: impl Into<String>) -> Self {
        Self::Protocol {
            status,
            message: message.into(),
        }
    }

    /// Unclassified failure carrying a labelled cause chain.
    pub fn failure<E: ChainedError>(err: E) -> Self {
        Self::Failure(Box::new(err))
    }

    /// Unclassified failure from an arbitrary error.
    ///
    /// The concrete type name is captured here, while it is still
    /// statically known, and becomes the metric label.
    pub fn other<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Failure(Box::new(Labeled::new(err)))
    }
}

impl ChainedError for InvokeError {
    fn type_label(&self) -> &str {
        match self {
            Self::Protocol { .. } => "Protocol",
            Self::Failure(inner) => inner.type_label(),
            Self::UnknownMethod(_) => "UnknownMethod",
        }
    }

    fn chained_cause(&self) -> Option<&dyn ChainedError> {
        match self {
            Self::Failure(inner) => inner.chained_cause(),
            _ => None,
        }
    }
}

/// Labelled failure chain consumed by the metered decorator.
///
/// `type_label` supplies the short name recorded as a metric label;
/// `chained_cause` exposes the next labelled error, letting
/// [`root_cause`] resolve the deepest failure in a chain.
pub trait ChainedError: Error + Send + Sync + 'static {
    /// Unqualified type name used as a metric label value.
    fn type_label(&self) -> &str;

    /// Next labelled error in the cause chain, if any.
    fn chained_cause(&self) -> Option<&dyn ChainedError> {
        None
    }
}

/// Walk the labelled cause chain to its deepest error.
pub fn root_cause(err: &dyn ChainedError) -> &dyn ChainedError {
    let mut current = err;
    while let Some(cause) = current.chained_cause() {
        current = cause;
    }
    current
}

/// Unqualified name of `T`: module path and generic parameters stripped.
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Adapter that labels an arbitrary error with its concrete type name.
///
/// The wrapped error's own `source()` chain carries no labels, so for
/// metric purposes the root cause resolves to the adapter itself.
#[derive(Debug)]
pub struct Labeled<E> {
    label: &'static str,
    inner: E,
}

impl<E> Labeled<E>
where
    E: Error + Send + Sync + 'static,
{
    /// Wrap an error, capturing its unqualified type name.
    pub fn new(inner: E) -> Self {
        Self {
            label: simple_type_name::<E>(),
            inner,
        }
    }
}

impl<E: fmt::Display> fmt::Display for Labeled<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<E> Error for Labeled<E>
where
    E: Error + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl<E> ChainedError for Labeled<E>
where
    E: Error + Send + Sync + 'static,
{
    fn type_label(&self) -> &str {
        self.label
    }
}

/// Result type alias for callmeter operations.
pub type Result<T> = std::result::Result<T, InvokeError>;
