//! Error types for checkhook.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RegistryError`] - Errors reported to callers of the registration API
//! - [`HookError`] - A hook that failed while handling a check failure

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by registration calls.
///
/// This is the only error kind that crosses the registry boundary. Lookup
/// misses are reported as `None` or empty collections instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The call was given an argument it cannot act on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A hook that did not produce a verdict.
///
/// The dispatcher absorbs these: they are logged and treated as
/// [`Verdict::Continue`](crate::Verdict::Continue).
#[derive(Error, Debug)]
pub enum HookError {
    /// The hook returned an error.
    #[error(transparent)]
    Failed(BoxError),

    /// The hook panicked during execution.
    #[error("hook panicked: {0}")]
    Panic(String),
}

impl HookError {
    /// Short label for log records.
    pub fn kind(&self) -> &'static str {
        match self {
            HookError::Failed(_) => "error",
            HookError::Panic(_) => "panic",
        }
    }

    /// Build a [`HookError::Panic`] from a payload caught by `catch_unwind`.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        HookError::Panic(message)
    }
}

impl From<BoxError> for HookError {
    fn from(err: BoxError) -> Self {
        HookError::Failed(err)
    }
}
