//! Check-type to hooks index.
//!
//! Maps every concrete check type to the ordered hooks that must be consulted
//! when it fails. Sequences are shared copy-on-write: a dispatch clones the
//! `Arc` of the sequence it needs and iterates it without holding any lock,
//! while mutations go through `Arc::make_mut` and never disturb a snapshot
//! already handed out.

use crate::propagation::closure;
use checkhook_core::{Actor, CheckType, HookId, SharedHook};
use std::{collections::HashMap, sync::Arc};

/// A hook together with its registry id.
pub struct HookEntry<C: CheckType, A: Actor> {
    id: HookId,
    hook: SharedHook<C, A>,
}

impl<C: CheckType, A: Actor> HookEntry<C, A> {
    /// Create a new hook entry.
    pub fn new(id: HookId, hook: SharedHook<C, A>) -> Self {
        Self { id, hook }
    }

    /// Get the registry id.
    pub fn id(&self) -> HookId {
        self.id
    }

    /// Get the hook reference.
    pub fn hook(&self) -> &SharedHook<C, A> {
        &self.hook
    }
}

impl<C: CheckType, A: Actor> Clone for HookEntry<C, A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            hook: Arc::clone(&self.hook),
        }
    }
}

/// An ordered, duplicate-free snapshot of the hooks for one check type.
pub type HookSequence<C, A> = Arc<Vec<HookEntry<C, A>>>;

/// The check-type to hooks mapping.
///
/// Holds no empty sequences: an entry disappears as soon as its last hook
/// is removed.
pub struct CheckIndex<C: CheckType, A: Actor> {
    entries: HashMap<C, HookSequence<C, A>>,
}

impl<C: CheckType, A: Actor> CheckIndex<C, A> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Append `entry` to the sequence for `check` unless its id is already there.
    ///
    /// Returns whether the sequence changed.
    pub fn insert(&mut self, check: C, entry: HookEntry<C, A>) -> bool {
        let sequence = self.entries.entry(check).or_default();
        if sequence.iter().any(|e| e.id == entry.id) {
            return false;
        }
        Arc::make_mut(sequence).push(entry);
        true
    }

    /// Insert `entry` at `target` and every check type it propagates to.
    ///
    /// Returns how many sequences changed.
    pub fn insert_closure(&mut self, target: C, entry: &HookEntry<C, A>) -> usize {
        closure(target)
            .into_iter()
            .filter(|check| self.insert(*check, entry.clone()))
            .count()
    }

    /// Snapshot of the hooks registered for exactly `check`.
    pub fn get(&self, check: C) -> Option<HookSequence<C, A>> {
        self.entries.get(&check).cloned()
    }

    /// Remove the hook with `id` from every sequence, dropping emptied ones.
    ///
    /// Returns how many sequences contained it.
    pub fn remove(&mut self, id: HookId) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, sequence| {
            if let Some(position) = sequence.iter().position(|e| e.id == id) {
                Arc::make_mut(sequence).remove(position);
                removed += 1;
            }
            !sequence.is_empty()
        });
        removed
    }

    /// Whether `check` has at least one hook.
    pub fn contains(&self, check: C) -> bool {
        self.entries.contains_key(&check)
    }

    /// Check types with at least one hook, in taxonomy order.
    pub fn checks(&self) -> Vec<C> {
        C::values()
            .iter()
            .copied()
            .filter(|check| self.entries.contains_key(check))
            .collect()
    }

    /// Number of check types with at least one hook.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no check type has hooks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every sequence.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<C: CheckType, A: Actor> Default for CheckIndex<C, A> {
    fn default() -> Self {
        Self::new()
    }
}
