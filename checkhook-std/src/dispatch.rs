//! Check-failure dispatch.
//!
//! Runs the hooks resolved for one failed check, in order, until one of them
//! cancels. Every hook runs isolated: an error or a panic is logged with full
//! context and counted as `Continue`, so one faulty hook can neither break
//! the check that failed nor keep later hooks from running.

use crate::{config::BacktracePolicy, index::HookEntry};
use checkhook_core::{Actor, CheckType, FailureHook, HookError, HookId, Verdict};
use std::{
    error::Error,
    panic::{self, AssertUnwindSafe},
};

/// What happened during one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// The hook that cancelled violation processing, if any.
    pub cancelled_by: Option<HookId>,
    /// How many hooks were invoked.
    pub invoked: usize,
    /// How many of the invoked hooks failed or panicked.
    pub failed: usize,
}

impl DispatchOutcome {
    /// Whether violation processing should be cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled_by.is_some()
    }
}

/// Run `hooks` for `actor` failing `check`, stopping at the first `Cancel`.
pub fn apply_hooks<C: CheckType, A: Actor>(
    check: C,
    actor: &A,
    hooks: &[HookEntry<C, A>],
    backtrace: BacktracePolicy,
) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();
    for entry in hooks {
        outcome.invoked += 1;
        match invoke(entry.hook().as_ref(), check, actor) {
            Ok(Verdict::Cancel) => {
                tracing::debug!(
                    hook = %entry.hook().description(),
                    check = check.name(),
                    actor = actor.name(),
                    "Hook cancelled violation processing"
                );
                outcome.cancelled_by = Some(entry.id());
                return outcome;
            }
            Ok(Verdict::Continue) => {}
            Err(err) => {
                outcome.failed += 1;
                log_hook_failure(check, actor, entry, &err, backtrace);
            }
        }
    }
    outcome
}

/// Call one hook, turning both errors and panics into a [`HookError`].
fn invoke<C: CheckType, A: Actor>(
    hook: &dyn FailureHook<C, A>,
    check: C,
    actor: &A,
) -> Result<Verdict, HookError> {
    match panic::catch_unwind(AssertUnwindSafe(|| hook.on_check_failure(check, actor))) {
        Ok(result) => result.map_err(HookError::Failed),
        Err(payload) => Err(HookError::from_panic(payload.as_ref())),
    }
}

fn log_hook_failure<C: CheckType, A: Actor>(
    check: C,
    actor: &A,
    entry: &HookEntry<C, A>,
    err: &HookError,
    backtrace: BacktracePolicy,
) {
    let backtrace = backtrace.capture();
    tracing::error!(
        hook = %entry.hook().description(),
        hook_id = %entry.id(),
        check = check.name(),
        group = check.group().map(CheckType::name),
        actor = actor.name(),
        error_kind = err.kind(),
        error = %err,
        causes = %source_chain(err),
        backtrace = ?backtrace,
        "Hook encountered an unexpected failure"
    );
}

/// `a: b: c` for every error below `err` in its source chain.
fn source_chain(err: &dyn Error) -> String {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallLog, FailingHook, PanickingHook, RecordingHook, TestCheck};
    use checkhook_core::{BoxError, SharedHook};
    use std::{fmt, sync::Arc};
    use tracing_test::traced_test;

    fn entries(hooks: Vec<SharedHook<TestCheck, String>>) -> Vec<HookEntry<TestCheck, String>> {
        hooks
            .into_iter()
            .enumerate()
            .map(|(i, hook)| {
                let id = HookId::new(i as u64 + 1).expect("non-zero id");
                HookEntry::new(id, hook)
            })
            .collect()
    }

    fn player() -> String {
        "Notch".to_string()
    }

    #[test]
    fn test_empty_sequence_does_not_cancel() {
        let outcome = apply_hooks(TestCheck::Chat, &player(), &[], BacktracePolicy::Never);
        assert_eq!(outcome, DispatchOutcome::default());
        assert!(!outcome.is_cancelled());
    }

    #[test]
    fn test_short_circuit_on_cancel() {
        let log = CallLog::new();
        let hooks = entries(vec![
            Arc::new(RecordingHook::named("first").with_log(&log)),
            Arc::new(
                RecordingHook::named("second")
                    .with_log(&log)
                    .with_verdict(Verdict::Cancel),
            ),
            Arc::new(RecordingHook::named("third").with_log(&log)),
        ]);

        let outcome = apply_hooks(TestCheck::Chat, &player(), &hooks, BacktracePolicy::Never);

        assert!(outcome.is_cancelled());
        assert_eq!(outcome.cancelled_by, HookId::new(2));
        assert_eq!(outcome.invoked, 2);
        assert_eq!(log.hook_names(), vec!["first", "second"]);
    }

    #[test]
    fn test_error_does_not_stop_later_hooks() {
        let hooks = entries(vec![
            Arc::new(FailingHook::new("broken", "lookup failed")),
            Arc::new(RecordingHook::named("exempt").with_verdict(Verdict::Cancel)),
        ]);

        let outcome = apply_hooks(TestCheck::Chat, &player(), &hooks, BacktracePolicy::Never);

        assert!(outcome.is_cancelled());
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.invoked, 2);
    }

    #[test]
    fn test_panic_is_contained() {
        let recorder = RecordingHook::named("after");
        let log = recorder.log();
        let hooks = entries(vec![
            Arc::new(PanickingHook::new("explosive")),
            Arc::new(recorder),
        ]);

        let outcome = apply_hooks(TestCheck::Chat, &player(), &hooks, BacktracePolicy::Never);

        assert!(!outcome.is_cancelled());
        assert_eq!(outcome.failed, 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    #[traced_test]
    fn test_failure_is_logged_with_context() {
        let hooks = entries(vec![Arc::new(FailingHook::new("broken", "lookup failed"))]);

        apply_hooks(
            TestCheck::MovingFlyingHover,
            &player(),
            &hooks,
            BacktracePolicy::Never,
        );

        assert!(logs_contain("Hook encountered an unexpected failure"));
        assert!(logs_contain("broken [test]"));
        assert!(logs_contain("MOVING_FLYING_HOVER"));
        assert!(logs_contain("MOVING_FLYING"));
        assert!(logs_contain("Notch"));
        assert!(logs_contain("lookup failed"));
    }

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "profile load failed")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection reset")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    impl Error for Inner {}

    struct ChainedFailureHook;

    impl FailureHook<TestCheck, String> for ChainedFailureHook {
        fn name(&self) -> &str {
            "Profiles"
        }

        fn version(&self) -> &str {
            "0.9"
        }

        fn on_check_failure(&self, _check: TestCheck, _actor: &String) -> Result<Verdict, BoxError> {
            Err(Box::new(Outer(Inner)))
        }
    }

    #[test]
    #[traced_test]
    fn test_failure_log_carries_causes_and_backtrace() {
        let hooks = entries(vec![Arc::new(ChainedFailureHook)]);

        let outcome = apply_hooks(TestCheck::FightSpeed, &player(), &hooks, BacktracePolicy::Always);

        assert_eq!(outcome.failed, 1);
        assert!(logs_contain("profile load failed"));
        assert!(logs_contain("causes=connection reset"));
        assert!(logs_contain("backtrace="));
        // Frames are resolved, so the dispatcher itself shows up.
        assert!(logs_contain("apply_hooks"));
    }

    #[test]
    #[traced_test]
    fn test_backtrace_disabled_by_policy() {
        let hooks = entries(vec![Arc::new(ChainedFailureHook)]);

        apply_hooks(TestCheck::FightSpeed, &player(), &hooks, BacktracePolicy::Never);

        assert!(logs_contain("backtrace=<disabled>"));
        assert!(!logs_contain("apply_hooks"));
    }

    #[test]
    fn test_source_chain() {
        let err = Outer(Inner);
        assert_eq!(source_chain(&err), "connection reset");
        assert_eq!(source_chain(&Inner), "");
    }
}
