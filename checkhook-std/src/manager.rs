//! The hook manager: registration, removal and dispatch behind one lock.
//!
//! [`HookManager`] owns the [`HookRegistry`] and the [`CheckIndex`]. It is
//! constructed once by the host and shared by reference or `Arc` with every
//! caller; there is no global instance.
//!
//! # Locking
//!
//! Every mutation takes the write side of a single `RwLock`, so registration,
//! propagation and removal never interleave. Dispatch only takes the read
//! side long enough to clone the snapshot of one hook sequence, then runs the
//! hooks with no lock held: concurrent dispatches never wait on each other,
//! and a hook may call back into the manager.

use crate::{
    config::{BacktracePolicy, ManagerConfig},
    dispatch::{DispatchOutcome, apply_hooks},
    index::{CheckIndex, HookEntry, HookSequence},
    registry::HookRegistry,
};
use checkhook_core::{Actor, CheckType, HookId, RegistryError, SharedHook};
use std::{
    collections::BTreeSet,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

struct State<C: CheckType, A: Actor> {
    registry: HookRegistry<C, A>,
    index: CheckIndex<C, A>,
}

impl<C: CheckType, A: Actor> State<C, A> {
    fn new() -> Self {
        Self {
            registry: HookRegistry::new(),
            index: CheckIndex::new(),
        }
    }

    fn add(&mut self, targets: &[C], hook: &SharedHook<C, A>) -> HookId {
        let id = self.registry.register(hook);
        let entry = HookEntry::new(id, Arc::clone(hook));
        for target in targets {
            self.index.insert_closure(*target, &entry);
        }
        id
    }

    fn remove(&mut self, id: HookId) -> Option<SharedHook<C, A>> {
        let hook = self.registry.remove(id)?;
        self.index.remove(id);
        Some(hook)
    }

    fn remove_where(
        &mut self,
        mut pred: impl FnMut(&SharedHook<C, A>) -> bool,
    ) -> Vec<(HookId, SharedHook<C, A>)> {
        let ids: Vec<HookId> = self
            .registry
            .iter()
            .filter(|(_, hook)| pred(*hook))
            .map(|(id, _)| id)
            .collect();
        ids.into_iter()
            .filter_map(|id| self.remove(id).map(|hook| (id, hook)))
            .collect()
    }
}

/// The check-failure hook registry and dispatcher.
///
/// # Example
///
/// ```rust,ignore
/// let manager = HookManager::<Check, Player>::new();
///
/// // Fires for MOVING and everything below it.
/// let id = manager.add_hook(Check::Moving, Arc::new(ExemptStaff));
///
/// // Called by a check when a player fails it.
/// if !manager.should_cancel(Check::MovingSurvivalFly, &player) {
///     add_violation_level(&player);
/// }
///
/// manager.remove_hook(id);
/// ```
pub struct HookManager<C: CheckType, A: Actor> {
    state: RwLock<State<C, A>>,
    config: ManagerConfig,
}

impl<C: CheckType, A: Actor> HookManager<C, A> {
    /// Create an empty manager with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    /// Create an empty manager with the given configuration.
    pub fn with_config(config: ManagerConfig) -> Self {
        Self {
            state: RwLock::new(State::new()),
            config,
        }
    }

    /// Start building a manager.
    pub fn builder() -> HookManagerBuilder<C, A> {
        HookManagerBuilder::new()
    }

    /// Get the configuration.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    // Hooks run outside the lock, so poisoning can only come from a bug in
    // the manager itself; the state is still consistent between operations.
    fn read(&self) -> RwLockReadGuard<'_, State<C, A>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State<C, A>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Register `hook` for `check`, a group, or [`CheckType::ALL`].
    ///
    /// Returns the hook's id; registering an already known instance again
    /// returns its existing id and only extends the check types it reaches.
    pub fn add_hook(&self, check: C, hook: SharedHook<C, A>) -> HookId {
        let id = self.write().add(&[check], &hook);
        log_hook_added(&hook, id);
        id
    }

    /// Register `hook` for several check types at once.
    ///
    /// `None` registers it for [`CheckType::ALL`]. An empty list still
    /// registers the hook and hands out its id, but the hook reaches no check
    /// type and is never dispatched to until it is added again with targets.
    ///
    /// [`RegistryError::InvalidArgument`] is reserved for a missing hook,
    /// which a `SharedHook` cannot be, so this currently always succeeds.
    pub fn add_hooks(
        &self,
        checks: Option<&[C]>,
        hook: SharedHook<C, A>,
    ) -> Result<HookId, RegistryError> {
        let all = [C::ALL];
        let targets = checks.unwrap_or(&all[..]);
        let id = self.write().add(targets, &hook);
        log_hook_added(&hook, id);
        Ok(id)
    }

    // ------------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------------

    /// Remove the hook with `id` from the registry and every check type.
    pub fn remove_hook(&self, id: HookId) -> Option<SharedHook<C, A>> {
        let hook = self.write().remove(id)?;
        log_hook_removed(&hook, id);
        Some(hook)
    }

    /// Remove this exact hook instance. Returns the id it had.
    pub fn remove_hook_instance(&self, hook: &SharedHook<C, A>) -> Option<HookId> {
        let removed = {
            let mut state = self.write();
            let id = state.registry.id_of(hook)?;
            state.remove(id).map(|hook| (id, hook))
        };
        let (id, hook) = removed?;
        log_hook_removed(&hook, id);
        Some(id)
    }

    /// Remove every given hook instance that is registered.
    ///
    /// Returns the ids of the hooks that were actually removed.
    pub fn remove_hooks<'a, I>(&self, hooks: I) -> BTreeSet<HookId>
    where
        I: IntoIterator<Item = &'a SharedHook<C, A>>,
    {
        let removed: Vec<(HookId, SharedHook<C, A>)> = {
            let mut state = self.write();
            hooks
                .into_iter()
                .filter_map(|hook| {
                    let id = state.registry.id_of(hook)?;
                    state.remove(id).map(|hook| (id, hook))
                })
                .collect()
        };
        removed
            .into_iter()
            .map(|(id, hook)| {
                log_hook_removed(&hook, id);
                id
            })
            .collect()
    }

    /// Remove every hook whose name matches exactly (case-sensitive).
    ///
    /// Returns `None` when no registered hook has that name.
    pub fn remove_hooks_by_name(&self, name: &str) -> Option<Vec<SharedHook<C, A>>> {
        let removed = self.write().remove_where(|hook| hook.name() == name);
        if removed.is_empty() {
            return None;
        }
        Some(log_all_removed(removed))
    }

    /// Remove every hook. Returns exactly what was registered at that moment.
    pub fn remove_all_hooks(&self) -> Vec<SharedHook<C, A>> {
        let removed = {
            let mut state = self.write();
            state.remove_where(|_| true)
        };
        log_all_removed(removed)
    }

    // ------------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------------

    /// Snapshot of every registered hook, in id order.
    ///
    /// This includes hooks that currently reach no check type.
    pub fn all_hooks(&self) -> Vec<SharedHook<C, A>> {
        self.read().registry.all()
    }

    /// Registered hooks whose name matches exactly (case-sensitive).
    pub fn hooks_by_name(&self, name: &str) -> Vec<SharedHook<C, A>> {
        self.read().registry.find_by_name(name)
    }

    /// The id of this exact hook instance, if registered.
    pub fn id_of(&self, hook: &SharedHook<C, A>) -> Option<HookId> {
        self.read().registry.id_of(hook)
    }

    /// Look up a registered hook by id.
    pub fn get(&self, id: HookId) -> Option<SharedHook<C, A>> {
        self.read().registry.get(id).cloned()
    }

    /// The hooks consulted when `check` fails, in the order they run.
    pub fn hooks_for(&self, check: C) -> Vec<SharedHook<C, A>> {
        self.snapshot(check)
            .map(|hooks| hooks.iter().map(|e| Arc::clone(e.hook())).collect())
            .unwrap_or_default()
    }

    /// Check types with at least one hook, in taxonomy order.
    pub fn registered_checks(&self) -> Vec<C> {
        self.read().index.checks()
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.read().registry.len()
    }

    /// Check if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.read().registry.is_empty()
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    fn snapshot(&self, check: C) -> Option<HookSequence<C, A>> {
        self.read().index.get(check)
    }

    /// Called by a check when `actor` fails it.
    ///
    /// Returns `true` if a hook asked for violation processing to be
    /// cancelled. Never fails: hook errors and panics are logged and
    /// treated as "do not cancel".
    pub fn should_cancel(&self, check: C, actor: &A) -> bool {
        self.dispatch(check, actor).is_cancelled()
    }

    /// Like [`HookManager::should_cancel`], reporting what happened.
    pub fn dispatch(&self, check: C, actor: &A) -> DispatchOutcome {
        match self.snapshot(check) {
            Some(hooks) => apply_hooks(check, actor, hooks.as_slice(), self.config.backtrace),
            None => DispatchOutcome::default(),
        }
    }
}

impl<C: CheckType, A: Actor> Default for HookManager<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

fn log_hook_added<C: CheckType, A: Actor>(hook: &SharedHook<C, A>, id: HookId) {
    tracing::info!(hook = %hook.description(), hook_id = %id, "Added hook");
}

fn log_hook_removed<C: CheckType, A: Actor>(hook: &SharedHook<C, A>, id: HookId) {
    tracing::info!(hook = %hook.description(), hook_id = %id, "Removed hook");
}

fn log_all_removed<C: CheckType, A: Actor>(
    removed: Vec<(HookId, SharedHook<C, A>)>,
) -> Vec<SharedHook<C, A>> {
    removed
        .into_iter()
        .map(|(id, hook)| {
            log_hook_removed(&hook, id);
            hook
        })
        .collect()
}

// ============================================================================
// HookManagerBuilder - for populating a manager at startup
// ============================================================================

/// Builder for constructing a [`HookManager`].
///
/// Hooks given to the builder are registered in order by
/// [`HookManagerBuilder::build`], exactly as if `add_hook` had been called.
///
/// # Example
/// ```ignore
/// let manager = HookManager::builder()
///     .backtrace(BacktracePolicy::FromEnv)
///     .hook_for_all(Arc::new(LoggingHook::new()))
///     .hook(Check::Moving, Arc::new(ExemptStaff))
///     .build();
/// ```
pub struct HookManagerBuilder<C: CheckType, A: Actor> {
    config: ManagerConfig,
    hooks: Vec<(C, SharedHook<C, A>)>,
}

impl<C: CheckType, A: Actor> HookManagerBuilder<C, A> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            config: ManagerConfig::default(),
            hooks: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set when backtraces are captured for failed hooks.
    pub fn backtrace(mut self, backtrace: BacktracePolicy) -> Self {
        self.config.backtrace = backtrace;
        self
    }

    /// Register a hook for `check` on build.
    pub fn hook(mut self, check: C, hook: SharedHook<C, A>) -> Self {
        self.hooks.push((check, hook));
        self
    }

    /// Register a hook for every check type on build.
    pub fn hook_for_all(self, hook: SharedHook<C, A>) -> Self {
        self.hook(C::ALL, hook)
    }

    /// Build the manager.
    pub fn build(self) -> HookManager<C, A> {
        let manager = HookManager::with_config(self.config);
        for (check, hook) in self.hooks {
            manager.add_hook(check, hook);
        }
        manager
    }
}

impl<C: CheckType, A: Actor> Default for HookManagerBuilder<C, A> {
    fn default() -> Self {
        Self::new()
    }
}
