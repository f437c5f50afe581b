//! The identity that failed a check.

use std::sync::Arc;

/// An opaque actor identity supplied by the host, usually a connected player.
///
/// The registry only reads [`Actor::name`] for log records; hooks receive
/// the actor untouched and may downcast or inspect it however they like.
pub trait Actor: Send + Sync + 'static {
    /// A human-readable name for log records.
    fn name(&self) -> &str;
}

impl Actor for String {
    fn name(&self) -> &str {
        self
    }
}

impl<T: Actor + ?Sized> Actor for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Actor + ?Sized> Actor for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}
