//! Testing utilities for checkhook.
//!
//! This module provides utilities to make testing hooks and dispatch easier.
//!
//! # Features
//!
//! - [`TestCheck`]: A small taxonomy with nested groups
//! - [`RecordingHook`]: A hook that records every failure it receives
//! - [`FailingHook`]: A hook that always returns an error
//! - [`PanickingHook`]: A hook that always panics

use checkhook_core::{Actor, BoxError, CheckType, FailureHook, Verdict};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// ============================================================================
// Test Taxonomy
// ============================================================================

/// A small taxonomy with two levels of nesting under `Moving`.
///
/// ```text
/// All
/// Moving
/// ├── MovingFlying
/// │   └── MovingFlyingHover
/// └── MovingSpeed
/// Fight
/// └── FightSpeed
/// Chat
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TestCheck {
    /// The universal pseudo-type.
    All,
    /// Movement group.
    Moving,
    /// Flying checks, inside `Moving`.
    MovingFlying,
    /// Hovering, inside `MovingFlying`.
    MovingFlyingHover,
    /// Speed, inside `Moving`.
    MovingSpeed,
    /// Combat group.
    Fight,
    /// Attack speed, inside `Fight`.
    FightSpeed,
    /// A lone check with no group.
    Chat,
}

impl CheckType for TestCheck {
    const ALL: Self = TestCheck::All;

    fn values() -> &'static [Self] {
        &[
            TestCheck::All,
            TestCheck::Moving,
            TestCheck::MovingFlying,
            TestCheck::MovingFlyingHover,
            TestCheck::MovingSpeed,
            TestCheck::Fight,
            TestCheck::FightSpeed,
            TestCheck::Chat,
        ]
    }

    fn group(self) -> Option<Self> {
        match self {
            TestCheck::MovingFlying | TestCheck::MovingSpeed => Some(TestCheck::Moving),
            TestCheck::MovingFlyingHover => Some(TestCheck::MovingFlying),
            TestCheck::FightSpeed => Some(TestCheck::Fight),
            TestCheck::All | TestCheck::Moving | TestCheck::Fight | TestCheck::Chat => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            TestCheck::All => "ALL",
            TestCheck::Moving => "MOVING",
            TestCheck::MovingFlying => "MOVING_FLYING",
            TestCheck::MovingFlyingHover => "MOVING_FLYING_HOVER",
            TestCheck::MovingSpeed => "MOVING_SPEED",
            TestCheck::Fight => "FIGHT",
            TestCheck::FightSpeed => "FIGHT_SPEED",
            TestCheck::Chat => "CHAT",
        }
    }
}

// ============================================================================
// Call Log
// ============================================================================

/// One recorded hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Name of the hook that was invoked.
    pub hook: String,
    /// Name of the failed check type.
    pub check: &'static str,
    /// Name of the actor.
    pub actor: String,
}

/// A call log that several recording hooks can share, to observe ordering.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Call>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, call: Call) {
        self.lock().push(call);
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().clone()
    }

    /// Names of the invoked hooks, in invocation order.
    pub fn hook_names(&self) -> Vec<String> {
        self.lock().iter().map(|c| c.hook.clone()).collect()
    }

    /// Get the number of recorded calls.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that records every failure it receives and answers with a fixed verdict.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHook::named("recorder").with_verdict(Verdict::Cancel);
/// let log = recorder.log();
///
/// manager.add_hook(TestCheck::Moving, Arc::new(recorder));
/// manager.should_cancel(TestCheck::MovingSpeed, &player);
///
/// assert_eq!(log.len(), 1);
/// ```
pub struct RecordingHook {
    name: String,
    version: String,
    verdict: Verdict,
    log: CallLog,
}

impl RecordingHook {
    /// Create a recording hook that returns `Continue`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "test".to_string(),
            verdict: Verdict::Continue,
            log: CallLog::new(),
        }
    }

    /// Answer every failure with `verdict`.
    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = verdict;
        self
    }

    /// Set the reported version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Record into a shared log instead of a private one.
    pub fn with_log(mut self, log: &CallLog) -> Self {
        self.log = log.clone();
        self
    }

    /// A handle to the log this hook records into.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl<C: CheckType, A: Actor> FailureHook<C, A> for RecordingHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn on_check_failure(&self, check: C, actor: &A) -> Result<Verdict, BoxError> {
        self.log.push(Call {
            hook: self.name.clone(),
            check: check.name(),
            actor: actor.name().to_string(),
        });
        Ok(self.verdict)
    }
}

// ============================================================================
// Failing Hooks
// ============================================================================

/// A hook whose callback always returns an error.
pub struct FailingHook {
    name: String,
    message: String,
}

impl FailingHook {
    /// Create a failing hook that reports `message`.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl<C: CheckType, A: Actor> FailureHook<C, A> for FailingHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        "test"
    }

    fn on_check_failure(&self, _check: C, _actor: &A) -> Result<Verdict, BoxError> {
        Err(self.message.clone().into())
    }
}

/// A hook whose callback always panics.
pub struct PanickingHook {
    name: String,
}

impl PanickingHook {
    /// Create a panicking hook.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<C: CheckType, A: Actor> FailureHook<C, A> for PanickingHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        "test"
    }

    fn on_check_failure(&self, check: C, _actor: &A) -> Result<Verdict, BoxError> {
        panic!("{} cannot handle {}", self.name, check.name());
    }
}
