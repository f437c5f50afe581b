//! # checkhook-std
//!
//! Standard implementations for the checkhook check-failure hook registry.
//!
//! This crate provides:
//! - **Registry**: [`HookRegistry`], the id-to-hook map
//! - **Index and propagation**: [`CheckIndex`], materializing group
//!   registrations down to every descendant check type
//! - **Dispatch**: [`apply_hooks`] with per-hook isolation and short-circuit
//! - **Manager**: [`HookManager`], all of the above behind one lock
//! - **Standard hooks**: Logging, closure-backed, conditional
//! - **Testing**: recording and failing hooks, a sample taxonomy

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use checkhook_core;

// Modules
pub mod config;
pub mod dispatch;
pub mod hooks;
pub mod index;
pub mod manager;
pub mod propagation;
pub mod registry;
pub mod testing;

pub use config::{BacktracePolicy, ManagerConfig};
pub use dispatch::{DispatchOutcome, apply_hooks};
pub use index::{CheckIndex, HookEntry, HookSequence};
pub use manager::{HookManager, HookManagerBuilder};
pub use registry::HookRegistry;
