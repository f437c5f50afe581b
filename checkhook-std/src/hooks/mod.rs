//! Standard hooks.

pub mod conditional;
pub mod func;
pub mod logging;

pub use conditional::ConditionalHook;
pub use func::FnHook;
pub use logging::LoggingHook;
