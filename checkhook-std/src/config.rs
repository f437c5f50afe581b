//! Manager configuration.

use std::backtrace::Backtrace;

/// When to capture a backtrace for a failed hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BacktracePolicy {
    /// Never capture.
    Never,
    /// Follow `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`.
    FromEnv,
    /// Always capture, regardless of the environment.
    #[default]
    Always,
}

impl BacktracePolicy {
    /// Capture a backtrace according to this policy.
    pub fn capture(self) -> Backtrace {
        match self {
            BacktracePolicy::Never => Backtrace::disabled(),
            BacktracePolicy::FromEnv => Backtrace::capture(),
            BacktracePolicy::Always => Backtrace::force_capture(),
        }
    }
}

/// Settings a [`HookManager`](crate::HookManager) was built with.
#[derive(Debug, Clone, Default)]
pub struct ManagerConfig {
    /// Backtrace capture for hook failure records.
    pub backtrace: BacktracePolicy,
}

impl ManagerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backtrace policy.
    pub fn with_backtrace(mut self, backtrace: BacktracePolicy) -> Self {
        self.backtrace = backtrace;
        self
    }
}
