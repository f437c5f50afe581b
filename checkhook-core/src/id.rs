//! Hook identifiers.

use std::{fmt, num::NonZeroU64};

/// Identifies one registered hook instance.
///
/// Ids are handed out by the registry starting at 1 and grow monotonically.
/// Removing a hook does not free its id. Once `u64::MAX` has been handed out
/// the counter stays there, so only then would an id be issued twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HookId(NonZeroU64);

impl HookId {
    /// The first id a registry hands out.
    pub const FIRST: HookId = HookId(NonZeroU64::MIN);

    /// Wrap a raw id. Returns `None` for zero.
    pub const fn new(raw: u64) -> Option<Self> {
        match NonZeroU64::new(raw) {
            Some(id) => Some(HookId(id)),
            None => None,
        }
    }

    /// The raw integer value.
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// The id following this one, saturating at `u64::MAX`.
    pub const fn next(self) -> Self {
        HookId(self.0.saturating_add(1))
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<HookId> for u64 {
    fn from(id: HookId) -> Self {
        id.get()
    }
}
