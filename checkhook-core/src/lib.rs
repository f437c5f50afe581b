//! # checkhook-core
//!
//! Core traits for the checkhook check-failure hook registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins that only provide hooks or describe a check taxonomy, without
//! pulling in the registry implementation from `checkhook-std`.
//!
//! # Building Blocks
//!
//! ## Taxonomy ([`CheckType`])
//!
//! A fixed enumeration of check identifiers forming a forest. Every check type
//! may point to one parent group, and one designated universal value
//! ([`CheckType::ALL`]) stands for "every check".
//!
//! ## Actor ([`Actor`])
//!
//! The opaque identity of whoever failed a check. The registry never looks
//! inside it except to name it in log records.
//!
//! ## Hook ([`FailureHook`])
//!
//! A listener consulted when a check fails. It answers with a [`Verdict`]:
//! `Continue` lets violation processing go ahead, `Cancel` suppresses it and
//! stops further hooks from being consulted.
//!
//! # Error Types
//!
//! - [`RegistryError`] - Errors surfaced by registration calls
//! - [`HookError`] - A failed or panicked hook, absorbed by the dispatcher

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod actor;
mod check_type;
mod error;
mod hook;
mod id;

// Re-exports
pub use actor::Actor;
pub use check_type::CheckType;
pub use error::{BoxError, HookError, RegistryError};
pub use hook::{FailureHook, SharedHook, Verdict};
pub use id::HookId;
