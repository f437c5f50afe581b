//! The hook registry: the single source of truth for which hooks exist.

use checkhook_core::{Actor, CheckType, HookId, SharedHook};
use std::{collections::BTreeMap, sync::Arc};

/// Assigns and remembers an id for every registered hook instance.
///
/// Hooks are matched by instance (`Arc::ptr_eq`), never by name or value.
/// Entries are only dropped by [`HookRegistry::remove`]; a hook that no
/// longer appears under any check type stays listed until removed.
pub struct HookRegistry<C: CheckType, A: Actor> {
    next_id: HookId,
    hooks: BTreeMap<HookId, SharedHook<C, A>>,
}

impl<C: CheckType, A: Actor> HookRegistry<C, A> {
    /// Create an empty registry. The first id handed out is 1.
    pub fn new() -> Self {
        Self {
            next_id: HookId::FIRST,
            hooks: BTreeMap::new(),
        }
    }

    /// Return the id of `hook`, allocating a new one on first sight.
    pub fn register(&mut self, hook: &SharedHook<C, A>) -> HookId {
        if let Some(id) = self.id_of(hook) {
            return id;
        }
        let id = self.next_id;
        self.next_id = id.next();
        self.hooks.insert(id, Arc::clone(hook));
        id
    }

    /// The id of `hook`, if this exact instance is registered.
    pub fn id_of(&self, hook: &SharedHook<C, A>) -> Option<HookId> {
        self.hooks
            .iter()
            .find(|(_, known)| Arc::ptr_eq(known, hook))
            .map(|(id, _)| *id)
    }

    /// Look up a hook by id.
    pub fn get(&self, id: HookId) -> Option<&SharedHook<C, A>> {
        self.hooks.get(&id)
    }

    /// Forget a hook. Removal does not free its id for reuse.
    pub fn remove(&mut self, id: HookId) -> Option<SharedHook<C, A>> {
        self.hooks.remove(&id)
    }

    /// Snapshot of every registered hook, in id order.
    pub fn all(&self) -> Vec<SharedHook<C, A>> {
        self.hooks.values().cloned().collect()
    }

    /// Registered hooks whose name matches exactly (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Vec<SharedHook<C, A>> {
        let mut found: Vec<SharedHook<C, A>> = Vec::new();
        for hook in self.hooks.values() {
            if hook.name() == name && !found.iter().any(|h| Arc::ptr_eq(h, hook)) {
                found.push(Arc::clone(hook));
            }
        }
        found
    }

    /// Iterate over `(id, hook)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (HookId, &SharedHook<C, A>)> {
        self.hooks.iter().map(|(id, hook)| (*id, hook))
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Check if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<C: CheckType, A: Actor> Default for HookRegistry<C, A> {
    fn default() -> Self {
        Self::new()
    }
}
