//! Closure-backed hooks.

use checkhook_core::{Actor, BoxError, CheckType, FailureHook, Verdict};
use std::marker::PhantomData;

/// A hook built from a name, a version and a closure.
///
/// Handy for plugins that only need a couple of lines of logic and would
/// rather not declare a type for it.
///
/// # Example
///
/// ```rust,ignore
/// let exempt_ops = FnHook::new("ExemptOps", "1.0", |_check: Check, player: &Player| {
///     Ok(Verdict::from(player.is_op()))
/// });
/// manager.add_hook(Check::ALL, Arc::new(exempt_ops));
/// ```
pub struct FnHook<C, A, F> {
    name: String,
    version: String,
    func: F,
    _marker: PhantomData<fn(C, &A)>,
}

impl<C, A, F> FnHook<C, A, F>
where
    C: CheckType,
    A: Actor,
    F: Fn(C, &A) -> Result<Verdict, BoxError> + Send + Sync + 'static,
{
    /// Create a new closure-backed hook.
    pub fn new(name: impl Into<String>, version: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            func,
            _marker: PhantomData,
        }
    }
}

impl<C, A, F> FailureHook<C, A> for FnHook<C, A, F>
where
    C: CheckType,
    A: Actor,
    F: Fn(C, &A) -> Result<Verdict, BoxError> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn on_check_failure(&self, check: C, actor: &A) -> Result<Verdict, BoxError> {
        (self.func)(check, actor)
    }
}
