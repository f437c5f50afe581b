//! Logging Hook - Observability for check failures.

use checkhook_core::{Actor, BoxError, CheckType, FailureHook, Verdict};

/// A hook that logs every check failure it sees and never cancels.
///
/// Register it for [`CheckType::ALL`] to get one `info` record per failed
/// check, or for a group to watch just that part of the taxonomy.
///
/// # Example
///
/// ```rust,ignore
/// use checkhook::{LoggingHook, HookManager};
///
/// let manager = HookManager::new();
/// manager.add_hook(Check::ALL, Arc::new(LoggingHook::named("failure-audit")));
/// ```
pub struct LoggingHook {
    name: String,
}

impl LoggingHook {
    /// Create a new `LoggingHook` with a default name.
    pub fn new() -> Self {
        Self::named("checkhook-logging")
    }

    /// Create a new `LoggingHook` with a custom name.
    ///
    /// The name shows up in log records and can be used to remove the hook.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for LoggingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CheckType, A: Actor> FailureHook<C, A> for LoggingHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn on_check_failure(&self, check: C, actor: &A) -> Result<Verdict, BoxError> {
        tracing::info!(
            hook = %self.name,
            check = check.name(),
            group = check.group().map(CheckType::name),
            actor = actor.name(),
            "Check failed"
        );
        Ok(Verdict::Continue)
    }
}
