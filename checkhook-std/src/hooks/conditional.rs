//! Conditional Hook - Consult a hook only for some failures.

use checkhook_core::{Actor, BoxError, CheckType, FailureHook, Verdict};

/// A hook that only consults its inner hook when a condition holds.
///
/// When the condition is `false` the failure is passed on with
/// [`Verdict::Continue`] and the inner hook is not invoked. Name and
/// version are those of the inner hook.
///
/// # Example
///
/// ```rust,ignore
/// // Exempt staff, but only from flying checks.
/// let hook = ConditionalHook::new(
///     |check: Check, _player: &Player| check.is_descendant_of(Check::MovingFlying),
///     ExemptStaff,
/// );
/// manager.add_hook(Check::Moving, Arc::new(hook));
/// ```
pub struct ConditionalHook<P, H> {
    condition: P,
    inner: H,
}

impl<P, H> ConditionalHook<P, H> {
    /// Create a new `ConditionalHook`.
    ///
    /// The inner hook will only be invoked when `condition(check, actor)` returns `true`.
    pub fn new(condition: P, inner: H) -> Self {
        Self { condition, inner }
    }
}

impl<C, A, P, H> FailureHook<C, A> for ConditionalHook<P, H>
where
    C: CheckType,
    A: Actor,
    P: Fn(C, &A) -> bool + Send + Sync + 'static,
    H: FailureHook<C, A>,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn version(&self) -> &str {
        self.inner.version()
    }

    fn on_check_failure(&self, check: C, actor: &A) -> Result<Verdict, BoxError> {
        if (self.condition)(check, actor) {
            self.inner.on_check_failure(check, actor)
        } else {
            Ok(Verdict::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingHook, TestCheck};

    #[test]
    fn test_condition_true_runs_inner() {
        let inner = RecordingHook::named("inner").with_verdict(Verdict::Cancel);
        let log = inner.log();
        let hook = ConditionalHook::new(
            |check: TestCheck, _: &String| check.is_descendant_of(TestCheck::Moving),
            inner,
        );

        let verdict = hook
            .on_check_failure(TestCheck::MovingFlyingHover, &"Grumm".to_string())
            .unwrap();

        assert_eq!(verdict, Verdict::Cancel);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_condition_false_skips_inner() {
        let inner = RecordingHook::named("inner").with_verdict(Verdict::Cancel);
        let log = inner.log();
        let hook = ConditionalHook::new(|_: TestCheck, actor: &String| actor == "staff", inner);

        let verdict = hook
            .on_check_failure(TestCheck::Chat, &"Grumm".to_string())
            .unwrap();

        assert_eq!(verdict, Verdict::Continue);
        assert!(log.is_empty());
        assert_eq!(FailureHook::<TestCheck, String>::name(&hook), "inner");
    }
}
