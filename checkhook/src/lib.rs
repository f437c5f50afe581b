//! # checkhook - Check-Failure Hook Registry
//!
//! `checkhook` lets plugins react when an actor fails a behavioral check and,
//! if they want to, cancel the violation processing that would follow.
//!
//! Hooks are registered against a node of a check taxonomy: a single check, a
//! group of checks, or [`CheckType::ALL`]. Group registrations are propagated
//! down to every check below the group once, at registration time, so the
//! dispatch path stays a single map lookup plus a walk over the matching hooks.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkhook::{CheckType, FailureHook, HookManager, Verdict, BoxError};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CheckType)]
//! enum Check {
//!     #[check(all)]
//!     All,
//!     Moving,
//!     #[check(group = Moving)]
//!     MovingSurvivalFly,
//! }
//!
//! struct ExemptStaff;
//!
//! impl FailureHook<Check, Player> for ExemptStaff {
//!     fn name(&self) -> &str { "ExemptStaff" }
//!     fn version(&self) -> &str { "1.0" }
//!     fn on_check_failure(&self, _check: Check, player: &Player) -> Result<Verdict, BoxError> {
//!         Ok(Verdict::from(player.is_staff()))
//!     }
//! }
//!
//! let manager = HookManager::<Check, Player>::new();
//! manager.add_hook(Check::Moving, Arc::new(ExemptStaff));
//!
//! // In the check:
//! if !manager.should_cancel(Check::MovingSurvivalFly, &player) {
//!     // raise the violation level
//! }
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use checkhook_core::{
    // Identity
    Actor,
    // Error types
    BoxError,
    // Taxonomy
    CheckType,
    // Hook
    FailureHook,
    HookError,
    HookId,
    RegistryError,
    SharedHook,
    Verdict,
};

// Registry and dispatch
pub use checkhook_std::{
    BacktracePolicy, CheckIndex, DispatchOutcome, HookEntry, HookManager, HookManagerBuilder,
    HookRegistry, HookSequence, ManagerConfig, apply_hooks,
};

// Standard hooks
pub use checkhook_std::hooks::{ConditionalHook, FnHook, LoggingHook};

/// Low-level building blocks, for hosts assembling their own manager.
pub mod propagation {
    pub use checkhook_std::propagation::closure;
}

/// Testing utilities.
pub mod testing {
    pub use checkhook_std::testing::{
        Call, CallLog, FailingHook, PanickingHook, RecordingHook, TestCheck,
    };
}

#[cfg(feature = "macros")]
pub use checkhook_macros::CheckType;

/// Commonly used items.
pub mod prelude {
    pub use crate::{
        Actor, BoxError, CheckType, DispatchOutcome, FailureHook, HookId, HookManager,
        SharedHook, Verdict,
    };
}
