//! # Failure Hooks
//!
//! A hook is consulted every time an actor fails a check it was registered
//! for, directly, through one of the check's groups, or through
//! [`CheckType::ALL`](crate::CheckType::ALL). It may ask for the
//! violation processing that would normally follow to be cancelled.
//!
//! Hooks run synchronously on whatever thread reported the failure, often a
//! per-player worker on the hot path. There is no timeout: a hook that
//! blocks stalls that one dispatch.

use crate::{actor::Actor, check_type::CheckType, error::BoxError};
use std::sync::Arc;

/// What a hook decided about one check failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// Let violation processing go ahead; consult the next hook.
    #[default]
    Continue,
    /// Suppress violation processing; no further hooks are consulted.
    Cancel,
}

impl Verdict {
    /// Whether this verdict cancels violation processing.
    pub fn is_cancel(self) -> bool {
        matches!(self, Verdict::Cancel)
    }
}

impl From<bool> for Verdict {
    fn from(cancel: bool) -> Self {
        if cancel {
            Verdict::Cancel
        } else {
            Verdict::Continue
        }
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_cancel()
    }
}

/// A listener invoked when an actor fails a check.
///
/// Identity is by instance: registering the same `Arc` twice yields the same
/// id, while two separate instances with identical names are distinct hooks.
///
/// # Example
///
/// ```rust,ignore
/// struct ExemptStaff;
///
/// impl FailureHook<Check, Player> for ExemptStaff {
///     fn name(&self) -> &str { "ExemptStaff" }
///     fn version(&self) -> &str { "1.2.0" }
///
///     fn on_check_failure(&self, _check: Check, player: &Player) -> Result<Verdict, BoxError> {
///         Ok(Verdict::from(player.is_staff()))
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FailureHook<{C}, {A}>`",
    label = "missing `FailureHook` implementation",
    note = "Hooks must implement `name`, `version` and `on_check_failure`."
)]
pub trait FailureHook<C: CheckType, A: Actor>: Send + Sync + 'static {
    /// Display name, also used for name-based lookup and removal.
    fn name(&self) -> &str;

    /// Version string shown next to the name in log records.
    fn version(&self) -> &str;

    /// Called when `actor` fails `check`.
    ///
    /// Errors are logged by the dispatcher and count as [`Verdict::Continue`].
    fn on_check_failure(&self, check: C, actor: &A) -> Result<Verdict, BoxError>;

    /// `name [version]`, as it appears in log records.
    fn description(&self) -> String {
        format!("{} [{}]", self.name(), self.version())
    }
}

/// A hook shared between the registry, the index and in-flight dispatches.
pub type SharedHook<C, A> = Arc<dyn FailureHook<C, A>>;
